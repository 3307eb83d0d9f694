//! Templates command - List the notebook templates

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};

use colab_bridge::notebook::TemplateRegistry;

/// Render the registry as a table
pub fn format_templates(registry: &TemplateRegistry) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Template"),
        Cell::new("Cells"),
        Cell::new("Description"),
    ]);

    for template in registry.iter() {
        let id = if template.id == registry.default_id() {
            format!("{} (default)", template.id)
        } else {
            template.id.to_string()
        };
        table.add_row(vec![
            Cell::new(id),
            Cell::new(template.cells().len()),
            Cell::new(template.summary),
        ]);
    }

    table.to_string()
}

/// Execute the templates command
pub fn execute(registry: &TemplateRegistry) {
    println!("{}", format_templates(registry));
}
