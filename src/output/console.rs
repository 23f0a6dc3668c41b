use crate::output::PageReport;

/// Formats a list as `"1: first"`, `"2: second"`, ... one per line
pub fn format_enumerated(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}: {}\n", i + 1, item))
        .collect()
}

/// Prints a page report to stdout
///
/// The image section is skipped when no image links were collected.
pub fn print_page_report(report: &PageReport) {
    println!("\nAll urls in {}", report.url);
    print!("{}", format_enumerated(&report.all_links));

    println!("\nAll local urls in {}", report.url);
    print!("{}", format_enumerated(&report.local_links));

    if !report.image_links.is_empty() {
        println!("\nImage urls in {}", report.url);
        print!("{}", format_enumerated(&report.image_links));
    }

    for entry in &report.next_level {
        println!(
            "\nNext level urls for {}\n\t from url {}",
            report.url, entry.url
        );
        print!("{}", format_enumerated(&entry.links));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_enumerated_is_one_based() {
        let items = vec!["/a".to_string(), "http://x.com".to_string()];
        assert_eq!(format_enumerated(&items), "1: /a\n2: http://x.com\n");
    }

    #[test]
    fn test_format_enumerated_empty() {
        assert_eq!(format_enumerated(&[]), "");
    }
}
