//! Global aggregation over a small in-memory dataset.
//!
//! The classic grocery-list snippet: five fixed records, one implicit global
//! group, and three named aggregates (min, mean, max) over the unit price.
//! The aggregation runs inside a scoped pipeline context and can hand its
//! result to a caller-supplied verification hook before returning it.
//!
//! Run with: `cargo run --example grocery_aggregate`

use anyhow::Result;
use girder::combiners::{MaxF64, MeanF64, MinF64};
use girder::{AggregateRow, Pipeline, from_vec};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GroceryItem {
    recipe: String,
    fruit: String,
    quantity: u32,
    unit_price: f64,
}

fn item(recipe: &str, fruit: &str, quantity: u32, unit_price: f64) -> GroceryItem {
    GroceryItem {
        recipe: recipe.to_string(),
        fruit: fruit.to_string(),
        quantity,
        unit_price,
    }
}

fn grocery_list() -> Vec<GroceryItem> {
    vec![
        item("pie", "raspberry", 1, 3.50),
        item("pie", "blackberry", 1, 4.00),
        item("pie", "blueberry", 1, 2.00),
        item("muffin", "blueberry", 2, 2.00),
        item("muffin", "banana", 3, 1.00),
    ]
}

/// Aggregate the grocery list as one global group, yielding a single row
/// with `min_price`, `mean_price`, and `max_price`.
///
/// An optional `check` hook receives the rows before they are returned.
fn global_aggregate(check: Option<&dyn Fn(&[AggregateRow])>) -> Result<Vec<AggregateRow>> {
    let rows = Pipeline::scope(|p| {
        from_vec(p, grocery_list())
            .group_globally()
            .aggregate_field(|g: &GroceryItem| g.unit_price, MinF64, "min_price")
            .aggregate_field(|g: &GroceryItem| g.unit_price, MeanF64, "mean_price")
            .aggregate_field(|g: &GroceryItem| g.unit_price, MaxF64, "max_price")
            .apply()
            .collect_seq()
    })?;

    if let Some(check) = check {
        check(&rows);
    }
    Ok(rows)
}

fn main() -> Result<()> {
    let rows = global_aggregate(None)?;
    for row in &rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}
