use dailytask_core::templates::template_variables;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
struct VariableRow {
    #[tabled(rename = "Placeholder")]
    placeholder: String,
    #[tabled(rename = "Description")]
    description: &'static str,
}

pub fn run() {
    let rows: Vec<VariableRow> = template_variables()
        .into_iter()
        .map(|(name, description)| VariableRow { placeholder: format!("{{{{{name}}}}}"), description })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
}
