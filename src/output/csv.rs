//! CSV output, one row per block.

use super::terminal::format_field;
use crate::models::CidrBlock;
use crate::processing::RangeReport;

/// Render reports as CSV with a header row.
pub fn render_csv(reports: &[RangeReport]) -> String {
    let mut out = csv_line("range", "cidr", "first", "last", "addresses");

    for report in reports {
        let range = format!("{}-{}", report.start, report.end);
        for cidr in &report.cidrs {
            out.push_str(&csv_line(
                &range,
                &cidr.to_string(),
                &cidr.first().to_string(),
                &cidr.last().to_string(),
                &address_count(cidr),
            ));
        }
    }
    out
}

fn csv_line(range: &str, cidr: &str, first: &str, last: &str, addresses: &str) -> String {
    format!(
        "{range},{cidr},{first},{last},{addresses}\n",
        range = format_field(range, 33),
        cidr = format_field(cidr, 20),
        first = format_field(first, 17),
        last = format_field(last, 17),
        addresses = format_field(addresses, 12),
    )
}

/// Block size as text. `::/0` holds 2^128 addresses, one more than `u128::MAX`.
fn address_count(cidr: &CidrBlock) -> String {
    cidr.num_addresses()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "340282366920938463463374607431768211456".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressRange;

    #[test]
    fn test_render_csv() {
        let range: AddressRange = "10.0.0.1-10.0.0.3".parse().unwrap();
        let csv = render_csv(&[RangeReport::new(&range)]);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            r#"                          "range",              "cidr",          "first",           "last", "addresses""#
        );
        assert_eq!(
            lines[1],
            r#"              "10.0.0.1-10.0.0.3",       "10.0.0.1/32",       "10.0.0.1",       "10.0.0.1",         "1""#
        );
        assert_eq!(
            lines[2],
            r#"              "10.0.0.1-10.0.0.3",       "10.0.0.2/31",       "10.0.0.2",       "10.0.0.3",         "2""#
        );
    }

    #[test]
    fn test_address_count_whole_ipv6() {
        let cidr: CidrBlock = "::/0".parse().unwrap();
        assert_eq!(
            address_count(&cidr),
            "340282366920938463463374607431768211456"
        );
        let cidr: CidrBlock = "0.0.0.0/0".parse().unwrap();
        assert_eq!(address_count(&cidr), "4294967296");
    }
}
