//! JSON output.

use crate::processing::RangeReport;
use std::error::Error;

/// Render reports as a pretty printed JSON array.
pub fn render_json(reports: &[RangeReport]) -> Result<String, Box<dyn Error>> {
    let mut json = serde_json::to_string_pretty(reports)
        .map_err(|e| format!("Error serializing JSON: {e}"))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddressRange;
    use serde_json::Value;

    #[test]
    fn test_render_json() {
        let range: AddressRange = "2400:ee00:101c:6100:0:9d41:e2a9:efcf-2400:ee00:101c:6100:0:9d41:e2a9:efd7"
            .parse()
            .unwrap();
        let json = render_json(&[RangeReport::new(&range)]).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["start"], "2400:ee00:101c:6100:0:9d41:e2a9:efcf");
        assert_eq!(value[0]["end"], "2400:ee00:101c:6100:0:9d41:e2a9:efd7");
        assert_eq!(
            value[0]["cidrs"],
            serde_json::json!([
                "2400:ee00:101c:6100:0:9d41:e2a9:efcf/128",
                "2400:ee00:101c:6100:0:9d41:e2a9:efd0/125"
            ])
        );
    }

    #[test]
    fn test_render_json_empty() {
        assert_eq!(render_json(&[]).unwrap(), "[]\n");
    }
}
