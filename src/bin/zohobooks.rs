//! Zoho Books CLI binary.
//!
//! A command-line interface for interacting with the Zoho Books API.

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;
use zohobooks::cli::{Cli, Command, Entity};
use zohobooks::output::PrettyPrint;
use zohobooks::{
    Bill, BillsFilter, BooksClient, Contact, ContactsFilter, Delete, Get, Invoice,
    InvoicesFilter, Item, ItemsFilter, List, Page, DEFAULT_PER_PAGE,
};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match BooksClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Hint: Set ZOHO_BOOKS_AUTH_TOKEN and ZOHO_BOOKS_ORGANIZATION_ID environment variables"
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Pagination options of `list`.
struct ListArgs {
    page: Option<u32>,
    per_page: Option<u32>,
    to: Option<u32>,
    all: bool,
}

async fn run(client: &BooksClient, cli: Cli) -> zohobooks::Result<()> {
    match cli.command {
        Command::Get { entity, id } => handle_get(client, entity, &id, cli.json).await,
        Command::List {
            entity,
            page,
            per_page,
            to,
            all,
            search,
        } => {
            let args = ListArgs {
                page,
                per_page,
                to,
                all,
            };
            handle_list(client, entity, &args, search, cli.json).await
        }
        Command::Delete { entity, id } => handle_delete(client, entity, &id).await,
    }
}

async fn handle_get(
    client: &BooksClient,
    entity: Entity,
    id: &str,
    json: bool,
) -> zohobooks::Result<()> {
    match entity {
        Entity::Contact => output_single(&Contact::get(client, id).await?, json),
        Entity::Invoice => output_single(&Invoice::get(client, id).await?, json),
        Entity::Bill => output_single(&Bill::get(client, id).await?, json),
        Entity::Item => output_single(&Item::get(client, id).await?, json),
    }
}

async fn handle_list(
    client: &BooksClient,
    entity: Entity,
    args: &ListArgs,
    search: Option<String>,
    json: bool,
) -> zohobooks::Result<()> {
    match entity {
        Entity::Contact => {
            let filter = ContactsFilter {
                search_text: search,
                ..Default::default()
            };
            list_entity::<Contact, _>(client, &filter, args, json, |c| ContactRow::from(c)).await
        }
        Entity::Invoice => {
            let filter = InvoicesFilter {
                search_text: search,
                ..Default::default()
            };
            list_entity::<Invoice, _>(client, &filter, args, json, |i| InvoiceRow::from(i)).await
        }
        Entity::Bill => {
            let filter = BillsFilter {
                search_text: search,
                ..Default::default()
            };
            list_entity::<Bill, _>(client, &filter, args, json, |b| BillRow::from(b)).await
        }
        Entity::Item => {
            let filter = ItemsFilter {
                search_text: search,
                ..Default::default()
            };
            list_entity::<Item, _>(client, &filter, args, json, |i| ItemRow::from(i)).await
        }
    }
}

async fn list_entity<T, R>(
    client: &BooksClient,
    filter: &T::Filter,
    args: &ListArgs,
    json: bool,
    to_row: fn(&T) -> R,
) -> zohobooks::Result<()>
where
    T: List + Serialize,
    R: Tabled,
{
    let page = args.page.unwrap_or(1);
    let per_page = args.per_page.unwrap_or(DEFAULT_PER_PAGE);

    if args.all {
        let items = T::list_all(client, filter).await?;
        output_items(&items, json, to_row)
    } else if let Some(end) = args.to {
        let items = T::list_range(client, filter, page, end, per_page).await?;
        output_items(&items, json, to_row)
    } else {
        let items = T::list_page(client, filter, page, per_page).await?;
        output_page(&items, json, to_row)
    }
}

async fn handle_delete(client: &BooksClient, entity: Entity, id: &str) -> zohobooks::Result<()> {
    let message = match entity {
        Entity::Contact => Contact::delete(client, id).await?,
        Entity::Invoice => Invoice::delete(client, id).await?,
        Entity::Bill => Bill::delete(client, id).await?,
        Entity::Item => Item::delete(client, id).await?,
    };
    println!("{message}");
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> zohobooks::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_items<T, R>(items: &[T], json: bool, to_row: fn(&T) -> R) -> zohobooks::Result<()>
where
    T: Serialize,
    R: Tabled,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} items", items.len());
    }
    Ok(())
}

fn output_page<T, R>(page: &Page<T>, json: bool, to_row: fn(&T) -> R) -> zohobooks::Result<()>
where
    T: Serialize,
    R: Tabled,
{
    if json {
        println!("{}", serde_json::to_string_pretty(&page.items)?);
    } else {
        let rows: Vec<R> = page.items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        let number = page.number().map_or_else(|| "?".to_string(), |n| n.to_string());
        if page.has_more() {
            println!("\nPage {number} (more available)");
        } else {
            println!("\nPage {number} (end)");
        }
    }
    Ok(())
}

fn amount(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_default()
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct ContactRow {
    id: String,
    name: String,
    #[tabled(rename = "type")]
    contact_type: String,
    email: String,
    status: String,
}

impl From<&Contact> for ContactRow {
    fn from(c: &Contact) -> Self {
        Self {
            id: c.contact_id.clone(),
            name: c.contact_name.clone(),
            contact_type: c.contact_type.clone().unwrap_or_default(),
            email: c.email.clone().unwrap_or_default(),
            status: c.status.clone().unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct InvoiceRow {
    id: String,
    number: String,
    customer: String,
    status: String,
    total: String,
    balance: String,
}

impl From<&Invoice> for InvoiceRow {
    fn from(i: &Invoice) -> Self {
        Self {
            id: i.invoice_id.clone(),
            number: i.invoice_number.clone().unwrap_or_default(),
            customer: i.customer_name.clone().unwrap_or_default(),
            status: i.status.clone().unwrap_or_default(),
            total: amount(i.total),
            balance: amount(i.balance),
        }
    }
}

#[derive(Tabled)]
struct BillRow {
    id: String,
    number: String,
    vendor: String,
    status: String,
    due: String,
    balance: String,
}

impl From<&Bill> for BillRow {
    fn from(b: &Bill) -> Self {
        Self {
            id: b.bill_id.clone(),
            number: b.bill_number.clone().unwrap_or_default(),
            vendor: b.vendor_name.clone().unwrap_or_default(),
            status: b.status.clone().unwrap_or_default(),
            due: b.due_date.map(|d| d.to_string()).unwrap_or_default(),
            balance: amount(b.balance),
        }
    }
}

#[derive(Tabled)]
struct ItemRow {
    id: String,
    name: String,
    rate: String,
    sku: String,
    status: String,
}

impl From<&Item> for ItemRow {
    fn from(i: &Item) -> Self {
        Self {
            id: i.item_id.clone(),
            name: i.name.clone(),
            rate: amount(i.rate),
            sku: i.sku.clone().unwrap_or_default(),
            status: i.status.clone().unwrap_or_default(),
        }
    }
}
