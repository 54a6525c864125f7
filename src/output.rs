//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Bill, Contact, Invoice, Item};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

const TIMESTAMP_DISPLAY: &str = "%Y-%m-%d %H:%M:%S %z";

fn money(amount: Option<f64>, currency: Option<&str>) -> String {
    match (amount, currency) {
        (Some(a), Some(c)) => format!("{a:.2} {c}"),
        (Some(a), None) => format!("{a:.2}"),
        (None, _) => "-".to_string(),
    }
}

impl PrettyPrint for Contact {
    fn pretty_print(&self) -> String {
        let header = format!("Contact: {}", self.contact_name);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("ID:             {}", self.contact_id),
        ];

        if let Some(ref kind) = self.contact_type {
            lines.push(format!("Type:           {}", kind));
        }

        if let Some(ref company) = self.company_name {
            lines.push(format!("Company:        {}", company));
        }

        if let Some(ref email) = self.email {
            lines.push(format!("Email:          {}", email));
        }

        lines.push(format!(
            "Status:         {}",
            if self.is_active() { "active" } else { "inactive" }
        ));

        if self.outstanding_receivable_amount.is_some() {
            lines.push(format!(
                "Receivable:     {}",
                money(self.outstanding_receivable_amount, self.currency_code.as_deref())
            ));
        }

        if let Some(person) = self.primary_person() {
            let name = [person.first_name.as_deref(), person.last_name.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            lines.push(format!("Primary:        {}", name));
        }

        if let Some(ref created) = self.created_time {
            lines.push(format!("Created:        {}", created.format(TIMESTAMP_DISPLAY)));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Invoice {
    fn pretty_print(&self) -> String {
        let header = format!(
            "Invoice: {}",
            self.invoice_number.as_deref().unwrap_or(&self.invoice_id)
        );
        let divider = "─".repeat(header.len().max(30));
        let currency = self.currency_code.as_deref();

        let mut lines = vec![
            header,
            divider,
            format!("ID:             {}", self.invoice_id),
        ];

        if let Some(ref customer) = self.customer_name {
            lines.push(format!("Customer:       {}", customer));
        }

        if let Some(ref status) = self.status {
            lines.push(format!("Status:         {}", status));
        }

        if let Some(date) = self.date {
            lines.push(format!("Date:           {}", date));
        }

        if let Some(due) = self.due_date {
            lines.push(format!("Due:            {}", due));
        }

        lines.push(format!("Total:          {}", money(self.total, currency)));
        lines.push(format!("Balance:        {}", money(self.balance, currency)));

        if !self.line_items.is_empty() {
            lines.push(format!("Line items:     {}", self.line_items.len()));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Bill {
    fn pretty_print(&self) -> String {
        let header = format!(
            "Bill: {}",
            self.bill_number.as_deref().unwrap_or(&self.bill_id)
        );
        let divider = "─".repeat(header.len().max(30));
        let currency = self.currency_code.as_deref();

        let mut lines = vec![
            header,
            divider,
            format!("ID:             {}", self.bill_id),
        ];

        if let Some(ref vendor) = self.vendor_name {
            lines.push(format!("Vendor:         {}", vendor));
        }

        if let Some(ref status) = self.status {
            lines.push(format!("Status:         {}", status));
        }

        if let Some(due) = self.due_date {
            lines.push(format!("Due:            {}", due));
        }

        lines.push(format!("Total:          {}", money(self.total, currency)));
        lines.push(format!("Balance:        {}", money(self.balance, currency)));

        lines.join("\n")
    }
}

impl PrettyPrint for Item {
    fn pretty_print(&self) -> String {
        let header = format!("Item: {}", self.name);
        let divider = "─".repeat(header.len().max(30));

        let mut lines = vec![
            header,
            divider,
            format!("ID:             {}", self.item_id),
            format!("Rate:           {}", money(self.rate, None)),
        ];

        if let Some(ref sku) = self.sku {
            lines.push(format!("SKU:            {}", sku));
        }

        if let Some(ref unit) = self.unit {
            lines.push(format!("Unit:           {}", unit));
        }

        if let Some(ref tax) = self.tax_name {
            lines.push(format!("Tax:            {}", tax));
        }

        lines.push(format!(
            "Status:         {}",
            if self.is_active() { "active" } else { "inactive" }
        ));

        lines.join("\n")
    }
}
