//! Response record shapes.
//!
//! Every field is optional on the wire. Amounts, dates, labels, relations
//! and nested payments go through the lenient coercion helpers, so a record
//! only fails to decode when its `id` is missing or not an integer.

use chrono::NaiveDateTime;
use ledgerdesk_shared::types::coerce::{lenient, optional_i64, optional_string};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{Map, Value};

/// A related record sent either expanded or as a reference.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Relation {
    /// Primary key only.
    Id(i64),
    /// Display label only.
    Text(String),
    /// Expanded record.
    Object(Map<String, Value>),
}

impl Relation {
    /// Primary key, when one can be read.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::Id(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Object(map) => map.get("id").and_then(optional_i64),
        }
    }

    /// First non-empty label among `keys`; a text relation is its own label.
    #[must_use]
    pub fn label(&self, keys: &[&str]) -> Option<String> {
        match self {
            Self::Id(_) => None,
            Self::Text(text) => Some(text.trim())
                .filter(|t| !t.is_empty())
                .map(str::to_string),
            Self::Object(map) => keys
                .iter()
                .find_map(|key| map.get(*key).and_then(optional_string)),
        }
    }
}

/// Payment nested in a sale or purchase.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentWire {
    /// Payment ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Mode label, e.g. `"Cash"`.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub payment_mode: Option<String>,
    /// Bank, expanded (`name`) or as a label.
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub bank_name: Option<Relation>,
    /// Account number.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub account_no: Option<String>,
    /// Cheque number.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub cheque_no: Option<String>,
    /// Amount paid.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub paid_amount: Decimal,
    /// Payment date; purchase payments never carry one.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub payment_date: Option<NaiveDateTime>,
}

/// Sales invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleWire {
    /// Sale ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Customer, expanded or as a reference.
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub customer: Option<Relation>,
    /// Invoice date.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub sale_date: Option<NaiveDateTime>,
    /// Invoice number.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub invoice_no: Option<String>,
    /// Total payable after discount.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_payable_amount: Decimal,
    /// Payments in backend order.
    #[serde(default, deserialize_with = "lenient::vec")]
    pub payments: Vec<PaymentWire>,
}

/// Purchase invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct PurchaseWire {
    /// Purchase ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Vendor, expanded or as a reference.
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub supplier: Option<Relation>,
    /// Invoice date.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub purchase_date: Option<NaiveDateTime>,
    /// Invoice number.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub invoice_no: Option<String>,
    /// Total payable after discount.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub total_payable_amount: Decimal,
    /// Payments in backend order.
    #[serde(default, deserialize_with = "lenient::vec")]
    pub payments: Vec<PaymentWire>,
}

/// General expense.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseWire {
    /// Expense ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Cost category, expanded or as a reference.
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub cost_category: Option<Relation>,
    /// Flattened cost category name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub cost_category_name: Option<String>,
    /// Amount spent.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub amount: Decimal,
    /// Expense date.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub expense_date: Option<NaiveDateTime>,
    /// Alternate date field used by older records.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub date: Option<NaiveDateTime>,
    /// Creation timestamp, the last date fallback.
    #[serde(default, deserialize_with = "lenient::opt_datetime")]
    pub created_at: Option<NaiveDateTime>,
}

/// Salary expense for one staff member and month.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryExpenseWire {
    /// Salary expense ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Staff display name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub staff_name: Option<String>,
    /// `YYYY-MM` month the salary belongs to.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub salary_month: Option<String>,
    /// Precomputed total, when the backend sent one.
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub total_salary: Option<Decimal>,
    /// Base salary.
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub base_amount: Option<Decimal>,
    /// Legacy base amount field.
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub amount: Option<Decimal>,
    /// Allowance.
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub allowance: Option<Decimal>,
    /// Bonus.
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub bonus: Option<Decimal>,
}

/// Stock item.
#[derive(Debug, Clone, Deserialize)]
pub struct StockWire {
    /// Stock ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Product, expanded (`product_name`) or as a reference.
    #[serde(default, deserialize_with = "lenient::opt_record")]
    pub product: Option<Relation>,
    /// Usable quantity on hand.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_stock_quantity: Decimal,
    /// Damaged quantity.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub damage_quantity: Decimal,
    /// Value of the quantity on hand.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub current_stock_value: Decimal,
    /// Reorder level; absent when never set.
    #[serde(default, deserialize_with = "lenient::opt_decimal")]
    pub reorder_level: Option<Decimal>,
}

/// Customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerWire {
    /// Customer ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Customer name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub customer_name: Option<String>,
    /// Shop name, used when the name is blank.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub shop_name: Option<String>,
    /// Due carried over from before the first invoice.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub previous_due_amount: Decimal,
}

/// Vendor.
#[derive(Debug, Clone, Deserialize)]
pub struct VendorWire {
    /// Vendor ID.
    #[serde(deserialize_with = "lenient::id")]
    pub id: i64,
    /// Vendor name.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub vendor_name: Option<String>,
    /// Shop name, used when the name is blank.
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub shop_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdesk_shared::types::envelope::decode_list;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_relation_shapes() {
        let expanded: Relation =
            serde_json::from_value(json!({"id": 4, "customer_name": "", "shop_name": "Karim Store"}))
                .unwrap();
        assert_eq!(expanded.id(), Some(4));
        assert_eq!(
            expanded.label(&["customer_name", "shop_name"]).as_deref(),
            Some("Karim Store")
        );

        let by_id: Relation = serde_json::from_value(json!(4)).unwrap();
        assert_eq!(by_id, Relation::Id(4));
        assert_eq!(by_id.label(&["customer_name"]), None);

        let by_name: Relation = serde_json::from_value(json!("Dhaka Bank")).unwrap();
        assert_eq!(by_name.id(), None);
        assert_eq!(by_name.label(&["name"]).as_deref(), Some("Dhaka Bank"));
    }

    #[test]
    fn test_sale_decodes_loose_fields() {
        let sale: SaleWire = serde_json::from_value(json!({
            "id": 12,
            "customer": null,
            "sale_date": "2025-11-03",
            "invoice_no": "",
            "total_payable_amount": "1500.50",
            "payments": [
                {"id": 1, "paid_amount": 500, "payment_mode": "Cash", "payment_date": null},
                {"id": 2, "paid_amount": "abc", "bank_name": {"name": "Dhaka Bank"}}
            ]
        }))
        .unwrap();

        assert!(sale.customer.is_none());
        assert!(sale.invoice_no.is_none());
        assert_eq!(sale.total_payable_amount, dec!(1500.50));
        assert_eq!(sale.payments[0].paid_amount, dec!(500));
        assert_eq!(sale.payments[1].paid_amount, dec!(0));
        assert_eq!(
            sale.payments[1]
                .bank_name
                .as_ref()
                .and_then(|b| b.label(&["name", "bank_name"]))
                .as_deref(),
            Some("Dhaka Bank")
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let stock: StockWire = serde_json::from_value(json!({"id": 3})).unwrap();
        assert_eq!(stock.current_stock_quantity, dec!(0));
        assert!(stock.reorder_level.is_none());
        assert!(stock.product.is_none());

        assert!(serde_json::from_value::<StockWire>(json!({"product": 1})).is_err());
    }

    #[test]
    fn test_malformed_optional_parts_keep_the_record() {
        let sales: Vec<SaleWire> = decode_list(
            json!([
                {"id": 1, "total_payable_amount": 500, "payments": null},
                {"id": 2, "total_payable_amount": 300, "payments": []},
                {"id": 3, "total_payable_amount": 1200, "customer": 1.5},
                {"id": "4", "total_payable_amount": 100, "payments": "none"}
            ]),
            "sales",
        );

        let ids: Vec<i64> = sales.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(sales.iter().all(|s| s.payments.is_empty()));
        assert!(sales[2].customer.is_none());

        let total: Decimal = sales.iter().map(|s| s.total_payable_amount).sum();
        assert_eq!(total, dec!(2100));
    }

    #[test]
    fn test_bad_payment_entries_are_skipped() {
        let purchase: PurchaseWire = serde_json::from_value(json!({
            "id": "9",
            "supplier": [2],
            "payments": [
                {"id": "51", "paid_amount": "200", "bank_name": false},
                {"paid_amount": "300"},
                "garbage"
            ]
        }))
        .unwrap();

        assert_eq!(purchase.id, 9);
        assert!(purchase.supplier.is_none());
        assert_eq!(purchase.payments.len(), 1);
        assert_eq!(purchase.payments[0].id, 51);
        assert!(purchase.payments[0].bank_name.is_none());
    }
}
