pub mod concurrency;
pub mod control_flow;
pub mod enums_structs;
pub mod error_handling;
pub mod functions;
pub mod generics;
pub mod objects;
pub mod protocols;
pub mod simple_values;

use crate::core::{ConfigProvider, Section};
use crate::utils::error::{Result, TourError};

pub use concurrency::ConcurrencySection;
pub use control_flow::ControlFlowSection;
pub use enums_structs::EnumsStructsSection;
pub use error_handling::ErrorHandlingSection;
pub use functions::FunctionsSection;
pub use generics::GenericsSection;
pub use objects::ObjectsSection;
pub use protocols::ProtocolsSection;
pub use simple_values::SimpleValuesSection;

/// 導覽的標準順序
pub const ALL_SECTIONS: [&str; 9] = [
    "simple_values",
    "control_flow",
    "functions",
    "objects",
    "enums_structs",
    "concurrency",
    "protocols",
    "error_handling",
    "generics",
];

fn build_section(name: &str, config: &dyn ConfigProvider) -> Result<Box<dyn Section>> {
    let section: Box<dyn Section> = match name {
        "simple_values" => Box::new(SimpleValuesSection),
        "control_flow" => Box::new(ControlFlowSection),
        "functions" => Box::new(FunctionsSection),
        "objects" => Box::new(ObjectsSection),
        "enums_structs" => Box::new(EnumsStructsSection),
        "concurrency" => Box::new(ConcurrencySection::new(config.server())),
        "protocols" => Box::new(ProtocolsSection),
        "error_handling" => Box::new(ErrorHandlingSection::new(
            config.printer_names().to_vec(),
            config.first_job(),
            config.fridge_contents().to_vec(),
            config.fridge_lookup(),
        )),
        "generics" => Box::new(GenericsSection),
        other => {
            return Err(TourError::UnknownSection {
                name: other.to_string(),
            })
        }
    };
    Ok(section)
}

/// 依標準順序建立設定中選取的章節
pub fn build_sections(config: &dyn ConfigProvider) -> Result<Vec<Box<dyn Section>>> {
    let selected = config.sections();

    if let Some(unknown) = selected
        .iter()
        .find(|name| !ALL_SECTIONS.contains(&name.as_str()))
    {
        return Err(TourError::UnknownSection {
            name: unknown.clone(),
        });
    }

    ALL_SECTIONS
        .iter()
        .filter(|name| selected.iter().any(|s| s == *name))
        .map(|name| build_section(name, config))
        .collect()
}
