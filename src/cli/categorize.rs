use crate::categorizer::RuleSet;
use crate::error::Result;
use crate::pipeline::recategorize_store;
use crate::settings::load_settings;

pub fn run(store: Option<&str>) -> Result<()> {
    let settings = load_settings();
    let path = super::store_path(&settings, store);
    let (result, total) = recategorize_store(&path, &RuleSet::default())?;
    println!(
        "{} categorized, {} pending, {} kept by override ({total} total)",
        result.categorized, result.still_pending, result.preserved
    );
    Ok(())
}
