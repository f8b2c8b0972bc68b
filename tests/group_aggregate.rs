use girder::combiners::{MaxF64, MeanF64, MinF64};
use girder::testing::{GroceryItem, TestPipeline, grocery_list};
use girder::{AggregateRow, PCollection, Pipeline, from_vec};

fn declare_price_aggregates(
    items: PCollection<GroceryItem>,
) -> PCollection<AggregateRow> {
    items
        .group_globally()
        .aggregate_field(|g: &GroceryItem| g.unit_price, MinF64, "min_price")
        .aggregate_field(|g: &GroceryItem| g.unit_price, MeanF64, "mean_price")
        .aggregate_field(|g: &GroceryItem| g.unit_price, MaxF64, "max_price")
        .apply()
}

#[test]
fn global_aggregate_prices() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let rows = declare_price_aggregates(from_vec(&p, grocery_list())).collect_seq()?;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.get("min_price"), Some(1.00));
    assert_eq!(row.get("mean_price"), Some(2.50));
    assert_eq!(row.get("max_price"), Some(4.00));
    Ok(())
}

#[test]
fn global_aggregate_row_has_exactly_declared_fields_in_order() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let rows = declare_price_aggregates(from_vec(&p, grocery_list())).collect_seq()?;

    let names: Vec<&str> = rows[0].field_names().collect();
    assert_eq!(names, vec!["min_price", "mean_price", "max_price"]);
    assert_eq!(rows[0].len(), 3);
    Ok(())
}

#[test]
fn global_aggregate_is_idempotent() -> anyhow::Result<()> {
    let p1 = TestPipeline::new();
    let first = declare_price_aggregates(from_vec(&p1, grocery_list())).collect_seq()?;

    let p2 = TestPipeline::new();
    let second = declare_price_aggregates(from_vec(&p2, grocery_list())).collect_seq()?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn global_aggregate_par_matches_seq() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let seq = declare_price_aggregates(from_vec(&p, grocery_list())).collect_seq()?;

    let par = declare_price_aggregates(from_vec(&p, grocery_list())).collect_par(None, Some(3))?;

    assert_eq!(seq, par);
    Ok(())
}

#[test]
fn global_aggregate_inside_scope() -> anyhow::Result<()> {
    let rows = Pipeline::scope(|p| {
        declare_price_aggregates(from_vec(p, grocery_list())).collect_seq()
    })?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("mean_price"), Some(2.50));
    Ok(())
}

#[test]
fn keyed_aggregate_one_row_per_recipe() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let mut rows = from_vec(&p, grocery_list())
        .group_by(|g: &GroceryItem| g.recipe.clone())
        .aggregate_field(|g: &GroceryItem| g.unit_price, MinF64, "min_price")
        .aggregate_field(|g: &GroceryItem| g.unit_price, MeanF64, "mean_price")
        .aggregate_field(|g: &GroceryItem| g.unit_price, MaxF64, "max_price")
        .apply()
        .collect_seq()?;
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(rows.len(), 2);

    let (muffin_key, muffin) = &rows[0];
    assert_eq!(muffin_key, "muffin");
    assert_eq!(muffin.get("min_price"), Some(1.00));
    assert_eq!(muffin.get("mean_price"), Some(1.50));
    assert_eq!(muffin.get("max_price"), Some(2.00));

    let (pie_key, pie) = &rows[1];
    assert_eq!(pie_key, "pie");
    assert_eq!(pie.get("min_price"), Some(2.00));
    assert_eq!(pie.get("mean_price"), Some((3.50 + 4.00 + 2.00) / 3.0));
    assert_eq!(pie.get("max_price"), Some(4.00));
    Ok(())
}

#[test]
fn aggregate_row_serializes_as_map() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let rows = declare_price_aggregates(from_vec(&p, grocery_list())).collect_seq()?;

    let json = serde_json::to_string(&rows[0])?;
    assert_eq!(json, r#"{"min_price":1.0,"mean_price":2.5,"max_price":4.0}"#);

    let back: AggregateRow = serde_json::from_str(&json)?;
    assert_eq!(back, rows[0]);
    Ok(())
}

#[test]
fn aggregate_with_no_declared_fields_yields_one_empty_row() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let rows = from_vec(&p, grocery_list())
        .group_globally()
        .apply()
        .collect_seq()?;

    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_empty());
    Ok(())
}

#[test]
fn mean_over_empty_input_is_zero() -> anyhow::Result<()> {
    let p = TestPipeline::new();
    let rows = from_vec(&p, Vec::<GroceryItem>::new())
        .group_globally()
        .aggregate_field(|g: &GroceryItem| g.unit_price, MeanF64, "mean_price")
        .apply()
        .collect_seq()?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("mean_price"), Some(0.0));
    Ok(())
}
