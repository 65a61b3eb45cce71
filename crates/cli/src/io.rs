//! Tabular input/output and curve export

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use tunjangan_core::{output_curves, AllowanceRow, EmployeeRecord, Inference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    Json,
    Yaml,
}

impl RecordFormat {
    /// Guess the format from a file extension
    pub fn detect(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

pub fn parse_records(content: &str, format: RecordFormat) -> Result<Vec<EmployeeRecord>> {
    let records = match format {
        RecordFormat::Json => {
            serde_json::from_str(content).context("records are not a valid JSON list")?
        },
        RecordFormat::Yaml => {
            serde_yaml::from_str(content).context("records are not a valid YAML list")?
        },
    };
    Ok(records)
}

pub fn read_records(path: &Path, format: Option<RecordFormat>) -> Result<Vec<EmployeeRecord>> {
    let format = match format.or_else(|| RecordFormat::detect(path)) {
        Some(format) => format,
        None => bail!(
            "cannot tell the format of {}, pass --format json|yaml",
            path.display()
        ),
    };
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read records from {}", path.display()))?;
    parse_records(&content, format)
}

/// Render rows as an aligned `id nama tunjangan` table
pub fn render_table(rows: &[AllowanceRow]) -> String {
    let name_width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .chain(std::iter::once("nama".len()))
        .max()
        .unwrap_or(4);
    let id_width = rows
        .iter()
        .map(|row| row.id.to_string().len())
        .chain(std::iter::once("id".len()))
        .max()
        .unwrap_or(2);

    let mut out = format!(
        "{:>id_width$}  {:<name_width$}  {:>14}\n",
        "id",
        "nama",
        "tunjangan",
        id_width = id_width,
        name_width = name_width
    );
    for row in rows {
        out.push_str(&format!(
            "{:>id_width$}  {:<name_width$}  {:>14.2}\n",
            row.id,
            row.name,
            row.allowance,
            id_width = id_width,
            name_width = name_width
        ));
    }
    out
}

/// Everything a plotting tool needs to draw one inference
#[derive(Debug, Serialize)]
pub struct CurveDocument {
    pub xs: Vec<f64>,
    pub kecil: Vec<f64>,
    pub menengah: Vec<f64>,
    pub besar: Vec<f64>,
    pub aggregated: Vec<f64>,
    pub defuzzified: f64,
}

impl CurveDocument {
    pub fn from_inference(inference: &Inference) -> Self {
        let xs = inference.distribution.xs();
        let curves = output_curves(xs);
        Self {
            xs: xs.to_vec(),
            kecil: curves.small.to_vec(),
            menengah: curves.medium.to_vec(),
            besar: curves.large.to_vec(),
            aggregated: inference.distribution.degrees().to_vec(),
            defuzzified: inference.allowance,
        }
    }
}

/// Write to a file, or stdout when no path is given
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            print!("{}", content);
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tunjangan_core::{AllowanceEngine, ApplicantProfile};

    #[test]
    fn test_detect_format() {
        assert_eq!(RecordFormat::detect(Path::new("a.json")), Some(RecordFormat::Json));
        assert_eq!(RecordFormat::detect(Path::new("a.YML")), Some(RecordFormat::Yaml));
        assert_eq!(RecordFormat::detect(Path::new("a.csv")), None);
        assert_eq!(RecordFormat::detect(Path::new("records")), None);
    }

    #[test]
    fn test_parse_yaml_records() {
        let yaml = "- id: 1\n  nama: Ali\n  usia: 30\n  masa kerja: 6\n  gaji: 750000\n";
        let records = parse_records(yaml, RecordFormat::Yaml).unwrap();
        assert_eq!(records, vec![EmployeeRecord::new(1, "Ali", 30.0, 6.0, 750_000.0)]);
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"[{"id": 3, "name": "Dewi", "age": 50, "tenure_years": 22, "salary": 1800000}]"#)
            .unwrap();
        let records = read_records(file.path(), None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Dewi");
    }

    #[test]
    fn test_unknown_format_is_error() {
        assert!(read_records(Path::new("records.csv"), None).is_err());
    }

    #[test]
    fn test_render_table() {
        let rows = vec![
            AllowanceRow {
                id: 1,
                name: "Ali".to_string(),
                allowance: 229_547.3757,
            },
            AllowanceRow {
                id: 12,
                name: "Kurniawati".to_string(),
                allowance: 0.0,
            },
        ];
        let table = render_table(&rows);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("nama"));
        assert!(lines[1].ends_with("229547.38"));
        assert!(lines[2].contains("Kurniawati"));
        assert!(lines[2].ends_with("0.00"));
    }

    #[test]
    fn test_curve_document() {
        let inference = AllowanceEngine::default()
            .infer(&ApplicantProfile::new(30.0, 6.0, 750_000.0))
            .unwrap();
        let doc = CurveDocument::from_inference(&inference);
        assert_eq!(doc.xs.len(), 1000);
        assert_eq!(doc.kecil.len(), 1000);
        assert_eq!(doc.aggregated.len(), 1000);
        assert_eq!(doc.kecil[0], 1.0);
        assert_eq!(doc.besar[999], 1.0);
        assert_eq!(doc.defuzzified, inference.allowance);
    }
}
