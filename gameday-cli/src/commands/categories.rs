use anyhow::Result;
use gameday_core::category::Category;

use crate::render::Render;

pub fn run() -> Result<()> {
    for category in Category::all() {
        println!("  {}", category.render());
    }
    Ok(())
}
