//! Basic example demonstrating the Zoho Books API client.
//!
//! Run with:
//! ```
//! ZOHO_BOOKS_AUTH_TOKEN=your-token ZOHO_BOOKS_ORGANIZATION_ID=your-org \
//!     cargo run --example basic
//! ```

use zohobooks::{
    BooksClient, Contact, ContactsFilter, ContactsFilterBy, Get, Invoice, InvoiceStatus,
    InvoicesFilter, List,
};

#[tokio::main]
async fn main() -> zohobooks::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Zoho Books client...");
    let client = BooksClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // First page of active contacts
    println!("\n--- Listing Contacts (first page) ---");
    let active = ContactsFilter {
        filter_by: Some(ContactsFilterBy::Active),
        ..Default::default()
    };
    let page = Contact::list_page(&client, &active, 1, 10).await?;
    println!(
        "Found {} contacts (more available: {})",
        page.len(),
        page.has_more()
    );
    for contact in &page {
        println!("  - {} ({})", contact.contact_name, contact.contact_id);
    }

    // Fetch the first contact again by ID
    if let Some(first) = page.items.first() {
        println!("\n--- Getting Contact: {} ---", first.contact_id);
        let contact = Contact::get(&client, &first.contact_id).await?;
        println!("Name: {}", contact.contact_name);
        println!("Type: {}", contact.contact_type.as_deref().unwrap_or("-"));
        if let Some(email) = &contact.email {
            println!("Email: {}", email);
        }
    }

    // Every overdue invoice, across all pages
    println!("\n--- Listing Overdue Invoices (all pages) ---");
    let overdue = InvoicesFilter {
        status: Some(InvoiceStatus::Overdue),
        ..Default::default()
    };
    let invoices = Invoice::list_all(&client, &overdue).await?;
    let outstanding: f64 = invoices.iter().filter_map(|i| i.balance).sum();
    println!(
        "{} overdue invoices, {:.2} outstanding",
        invoices.len(),
        outstanding
    );
    for invoice in invoices.iter().take(5) {
        println!(
            "  - {} {} due {}",
            invoice.invoice_number.as_deref().unwrap_or(&invoice.invoice_id),
            invoice.customer_name.as_deref().unwrap_or("-"),
            invoice
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string())
        );
    }

    println!("\nDone!");
    Ok(())
}
