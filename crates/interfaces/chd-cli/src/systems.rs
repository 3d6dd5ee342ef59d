use anyhow::Result;
use chd_core::SystemProfile;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemRow {
    pub id: SystemProfile,
    pub name: &'static str,
    pub extensions: Vec<&'static str>,
    pub dvd: bool,
}

impl From<SystemProfile> for SystemRow {
    fn from(p: SystemProfile) -> Self {
        Self {
            id: p,
            name: p.name(),
            extensions: p.extensions().to_vec(),
            dvd: p.supports_dvd(),
        }
    }
}

pub fn rows() -> Vec<SystemRow> {
    SystemProfile::sorted().into_iter().map(SystemRow::from).collect()
}

pub fn handle_list(json: bool) -> Result<()> {
    let rows = rows();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(":: Supported systems");
    for row in &rows {
        let dvd = if row.dvd { "  (ISO -> createdvd)" } else { "" };
        println!(
            "   {:<14} {:<34} {}{}",
            row.id.slug(),
            row.name,
            row.extensions.join(" "),
            dvd
        );
    }
    Ok(())
}
