use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

/// The sub-breeds found for one requested breed.
#[derive(Debug, Clone, Serialize)]
pub struct BreedListing {
    pub breed: String,
    pub sub_breeds: Vec<String>,
}

#[derive(Tabled, Serialize)]
struct SubBreedRow {
    #[tabled(rename = "Breed")]
    #[serde(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Sub-breed")]
    #[serde(rename = "Sub-breed")]
    sub_breed: String,
}

// -- Row builders --

/// One row per sub-breed. A breed without sub-breeds still gets one row.
fn build_sub_breed_rows(listings: &[BreedListing]) -> Vec<SubBreedRow> {
    listings
        .iter()
        .flat_map(|l| {
            if l.sub_breeds.is_empty() {
                vec![SubBreedRow {
                    breed: l.breed.clone(),
                    sub_breed: String::new(),
                }]
            } else {
                l.sub_breeds
                    .iter()
                    .map(|s| SubBreedRow {
                        breed: l.breed.clone(),
                        sub_breed: s.clone(),
                    })
                    .collect()
            }
        })
        .collect()
}

// -- Table output --

pub fn print_sub_breeds_table(listings: &[BreedListing]) {
    println!("{}", Table::new(build_sub_breed_rows(listings)));
}

// -- Markdown output --

pub fn print_sub_breeds_markdown(listings: &[BreedListing]) {
    let mut table = Table::new(build_sub_breed_rows(listings));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_sub_breeds_csv(listings: &[BreedListing]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_sub_breed_rows(listings) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_listings() -> Vec<BreedListing> {
        vec![
            BreedListing {
                breed: "hound".to_string(),
                sub_breeds: vec!["afghan".to_string(), "basset".to_string(), "blood".to_string()],
            },
            BreedListing {
                breed: "pug".to_string(),
                sub_breeds: vec![],
            },
        ]
    }

    // -- Row builder tests --

    #[test]
    fn test_build_rows_one_per_sub_breed() {
        let rows = build_sub_breed_rows(&sample_listings());
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].breed, "hound");
        assert_eq!(rows[0].sub_breed, "afghan");
        assert_eq!(rows[2].sub_breed, "blood");
    }

    #[test]
    fn test_build_rows_breed_without_sub_breeds() {
        let rows = build_sub_breed_rows(&sample_listings());
        let last = rows.last().unwrap();
        assert_eq!(last.breed, "pug");
        assert_eq!(last.sub_breed, "");
    }

    #[test]
    fn test_build_rows_empty() {
        let rows = build_sub_breed_rows(&[]);
        assert!(rows.is_empty());
    }

    // -- CSV output tests --

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_csv_headers_and_rows() {
        let rows = build_sub_breed_rows(&sample_listings());
        let csv = csv_from_rows(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Breed,Sub-breed");
        assert_eq!(lines[1], "hound,afghan");
        assert_eq!(lines[4], "pug,");
    }

    // -- JSON output tests --

    #[test]
    fn test_json_listing_shape() {
        let val = serde_json::to_value(sample_listings()).unwrap();
        assert_eq!(
            val[0],
            serde_json::json!({"breed": "hound", "sub_breeds": ["afghan", "basset", "blood"]})
        );
        assert_eq!(val[1]["sub_breeds"], serde_json::json!([]));
    }

    // -- Markdown output tests --

    #[test]
    fn test_markdown_structure() {
        let mut table = Table::new(build_sub_breed_rows(&sample_listings()));
        table.with(Style::markdown());
        let md = table.to_string();

        assert!(md.contains('|'));
        assert!(md.contains("---"));
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Breed"));
        assert!(header_line.contains("Sub-breed"));
        assert!(md.contains("basset"));
    }
}
