use crate::cli::ListFormat;
use crate::core::data::{Day, Venue, VenueStats};
use crate::utils::format::{format_day_schedule, truncate_string};
use anyhow::Result;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn venue_name(text: &str) -> ColoredString {
        text.bright_green()
    }

    pub fn neighborhood(text: &str) -> ColoredString {
        text.bright_cyan()
    }

    pub fn hours(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn tag(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>14}: {}", Self::label(label), value);
    }

    /// One line per venue for the simple list: name, neighborhood, price.
    pub fn format_venue_line(venue: &Venue) -> String {
        let mut line = format!("[{}]", Self::venue_name(&venue.name));
        if !venue.neighborhood.is_empty() {
            line.push_str(&format!(" {}", Self::neighborhood(&venue.neighborhood)));
        }
        if !venue.price_range.is_empty() {
            line.push_str(&format!(" {}", Self::muted(&venue.price_range)));
        }
        if !venue.tags.is_empty() {
            let tags = venue
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&format!(" {}", Self::tag(&tags)));
        }
        line
    }

    pub fn print_result_count(count: usize) {
        let noun = if count == 1 { "venue" } else { "venues" };
        println!("{}", Self::muted(&format!("{} {} found", count, noun)));
    }

    /// Full venue card: contact, week of schedules, deals, tags. The week is
    /// rendered from the normalized classifications, not the raw cells.
    pub fn print_venue_detailed(venue: &Venue, today: Option<Day>) {
        Self::print_header(&venue.name);

        if !venue.address.is_empty() {
            Self::print_field("Address", &venue.address);
        }
        if !venue.neighborhood.is_empty() {
            Self::print_field("Neighborhood", &venue.neighborhood);
        }
        if !venue.phone.is_empty() {
            Self::print_field("Phone", &venue.phone);
        }
        if !venue.website.is_empty() {
            Self::print_field("Website", &venue.website);
        }
        if !venue.price_range.is_empty() {
            Self::print_field("Price", &venue.price_range);
        }

        println!("\n{}", Self::title("🕐 Happy Hour Schedule"));
        for day in Day::ALL {
            let rendered = format_day_schedule(&venue.happy_hours.normalized(day));
            let marker = if today == Some(day) { "▸" } else { " " };
            println!(
                "{} {:>10}  {}",
                marker,
                Self::label(&day.to_string()),
                Self::hours(&rendered)
            );
        }

        if !venue.food_deals.is_empty() || !venue.drink_deals.is_empty() {
            println!("\n{}", Self::title("🍺 Deals"));
            if !venue.drink_deals.is_empty() {
                Self::print_field("Drinks", &venue.drink_deals);
            }
            if !venue.food_deals.is_empty() {
                Self::print_field("Food", &venue.food_deals);
            }
        }

        if !venue.tags.is_empty() {
            let tags = venue
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            println!("\n{}", Self::tag(&tags));
        }
    }
}

/// List rendering in the formats the `list` command offers.
pub struct DisplayFormatter;

impl DisplayFormatter {
    pub fn format_list(venues: &[Venue], format: &ListFormat, today: Option<Day>) -> Result<()> {
        match format {
            ListFormat::Simple => {
                for venue in venues {
                    println!("{}", OutputStyle::format_venue_line(venue));
                }
            }
            ListFormat::Detailed => {
                for venue in venues {
                    OutputStyle::print_venue_detailed(venue, today);
                    println!();
                }
            }
            ListFormat::Table => {
                println!(
                    "{:<28} {:<18} {:<6} {}",
                    OutputStyle::label("Name"),
                    OutputStyle::label("Neighborhood"),
                    OutputStyle::label("Price"),
                    OutputStyle::label("Today")
                );
                println!("{}", OutputStyle::separator());
                for venue in venues {
                    let today_hours = match today {
                        Some(day) => format_day_schedule(&venue.happy_hours.normalized(day)),
                        None => String::new(),
                    };
                    println!(
                        "{:<28} {:<18} {:<6} {}",
                        truncate_string(&venue.name, 27),
                        truncate_string(&venue.neighborhood, 17),
                        venue.price_range,
                        OutputStyle::hours(&today_hours)
                    );
                }
            }
            ListFormat::Json => {
                println!("{}", serde_json::to_string_pretty(venues)?);
            }
        }
        Ok(())
    }

    pub fn print_neighborhoods(neighborhoods: &[String]) -> Result<()> {
        OutputStyle::print_header("Neighborhoods");
        for neighborhood in neighborhoods {
            println!("  {}", OutputStyle::neighborhood(neighborhood));
        }
        Ok(())
    }

    pub fn print_tags(tags: &[String]) -> Result<()> {
        OutputStyle::print_header("Tags");
        for tag in tags {
            println!("  #{}", OutputStyle::tag(tag));
        }
        Ok(())
    }

    pub fn print_stats(stats: &VenueStats) -> Result<()> {
        OutputStyle::print_header("📊 Venue Statistics");
        OutputStyle::print_field("Venues", &stats.total_venues.to_string());
        OutputStyle::print_field("Neighborhoods", &stats.total_neighborhoods.to_string());
        OutputStyle::print_field("Promotion days", &stats.promotion_days.to_string());

        if !stats.neighborhood_counts.is_empty() {
            println!("\n{}", OutputStyle::title("By neighborhood"));
            let mut counts: Vec<_> = stats.neighborhood_counts.iter().collect();
            counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
            for (neighborhood, count) in counts {
                println!("  {:<24} {}", OutputStyle::neighborhood(neighborhood), count);
            }
        }

        if !stats.tag_counts.is_empty() {
            println!("\n{}", OutputStyle::title("By tag"));
            let mut counts: Vec<_> = stats.tag_counts.iter().collect();
            counts.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
            for (tag, count) in counts {
                println!("  #{:<23} {}", OutputStyle::tag(tag), count);
            }
        }

        Ok(())
    }
}
