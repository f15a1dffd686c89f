//! Spreadsheet CSV export to venue records
//!
//! The sheet has one row per venue with day-named columns holding the raw
//! schedule strings. Rows without a Name are skipped; short rows read as
//! blank cells. Schedule cells are passed through verbatim apart from
//! trimming — normalization happens at query time.

use crate::core::data::{Day, Venue, VenueCollection, WeeklySchedule};
use crate::utils::error::{AppError, AppResult};
use csv::ReaderBuilder;

const DAY_COLUMNS: [(&str, Day); 7] = [
    ("Monday", Day::Monday),
    ("Tuesday", Day::Tuesday),
    ("Wednesday", Day::Wednesday),
    ("Thursday", Day::Thursday),
    ("Friday", Day::Friday),
    ("Saturday", Day::Saturday),
    ("Sunday", Day::Sunday),
];

pub fn parse_venues(data: &str) -> AppResult<VenueCollection> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::Data(format!("Failed to read CSV header row: {}", e)))?
        .clone();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let day_indexes: Vec<(usize, Day)> = DAY_COLUMNS
        .iter()
        .filter_map(|(header, day)| column(header).map(|i| (i, *day)))
        .collect();

    let mut venues = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| AppError::Data(format!("Malformed CSV row: {}", e)))?;
        let field = |name: &str| -> String {
            column(name)
                .and_then(|i| record.get(i))
                .unwrap_or("")
                .trim()
                .to_string()
        };

        let name = field("Name");
        if name.is_empty() {
            continue;
        }

        let mut happy_hours = WeeklySchedule::default();
        for (index, day) in &day_indexes {
            let cell = record.get(*index).unwrap_or("").trim().to_string();
            happy_hours.set(*day, cell);
        }

        let tags: Vec<String> = field("Tags")
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();

        let price_range = {
            let p = field("Price Range");
            if p.is_empty() { "$$".to_string() } else { p }
        };

        venues.push(Venue {
            name,
            address: field("Address"),
            neighborhood: field("Neighborhood"),
            phone: field("Phone"),
            website: field("Website"),
            price_range,
            happy_hours,
            food_deals: field("Food Deals"),
            drink_deals: field("Drink Deals"),
            tags,
        });
    }

    Ok(VenueCollection { venues })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,Address,Neighborhood,Phone,Website,Price Range,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday,Sunday,Food Deals,Drink Deals,Tags
The Bulldog,237 6th St E,Lowertown,(651) 221-0750,https://example.com,$$,3:00 PM - 6:00 PM,3:00 PM - 6:00 PM,,,,N/A,,\"$1 off apps, $6 wings\",$4 drafts,\"Wings, Beer, sports-bar\"
,should be skipped,,,,,,,,,,,,,,
Short Row,100 Main St,Northeast";

    #[test]
    fn rows_map_to_venues() {
        let collection = parse_venues(SAMPLE).unwrap();
        assert_eq!(collection.len(), 2);

        let bulldog = &collection.venues[0];
        assert_eq!(bulldog.name, "The Bulldog");
        assert_eq!(bulldog.neighborhood, "Lowertown");
        assert_eq!(bulldog.happy_hours.raw(Day::Monday), "3:00 PM - 6:00 PM");
        assert_eq!(bulldog.happy_hours.raw(Day::Saturday), "N/A");
        assert_eq!(bulldog.food_deals, "$1 off apps, $6 wings");
        assert_eq!(bulldog.tags, vec!["wings", "beer", "sports-bar"]);
    }

    #[test]
    fn short_rows_read_as_blank_cells() {
        let collection = parse_venues(SAMPLE).unwrap();
        let short = &collection.venues[1];
        assert_eq!(short.name, "Short Row");
        assert_eq!(short.happy_hours.raw(Day::Monday), "");
        assert_eq!(short.price_range, "$$");
        assert!(short.tags.is_empty());
    }

    #[test]
    fn nameless_rows_are_skipped() {
        let collection = parse_venues(SAMPLE).unwrap();
        assert!(collection.venues.iter().all(|v| !v.name.is_empty()));
    }

    #[test]
    fn header_only_input_yields_empty_collection() {
        let collection = parse_venues("Name,Address,Neighborhood\n").unwrap();
        assert!(collection.is_empty());
    }
}
