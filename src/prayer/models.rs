use crate::countdown::{Anchors, parse_clock_time};
use serde::{Deserialize, Serialize};

/// Event name of the Sahur anchor.
pub const SAHUR_EVENT: &str = "İmsak";
/// Event name of the İftar anchor.
pub const IFTAR_EVENT: &str = "Akşam";

/// One row of the day's schedule as returned by the API
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PrayerTime {
    #[serde(rename = "saat")]
    pub clock_time: String,
    #[serde(rename = "vakit")]
    pub event_name: String,
}

impl PrayerTime {
    pub fn new(clock_time: &str, event_name: &str) -> Self {
        Self {
            clock_time: clock_time.to_string(),
            event_name: event_name.to_string(),
        }
    }

    pub fn is_anchor(&self) -> bool {
        self.event_name == SAHUR_EVENT || self.event_name == IFTAR_EVENT
    }
}

/// Response envelope of `GET /pray/all`
#[derive(Debug, Deserialize)]
pub struct PrayerResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Vec<PrayerTime>,
}

/// Error body the API sends with non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

/// A city's prayer times for one day, in API order.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct DailyTimes {
    entries: Vec<PrayerTime>,
}

impl DailyTimes {
    pub fn new(entries: Vec<PrayerTime>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PrayerTime] {
        &self.entries
    }

    fn find(&self, event_name: &str) -> Option<&PrayerTime> {
        self.entries.iter().find(|t| t.event_name == event_name)
    }

    /// The Sahur/İftar pair, or `None` if either is missing or unparseable.
    pub fn anchors(&self) -> Option<Anchors> {
        let sahur = parse_clock_time(&self.find(SAHUR_EVENT)?.clock_time)?;
        let iftar = parse_clock_time(&self.find(IFTAR_EVENT)?.clock_time)?;
        Anchors::new(sahur, iftar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use serde_json::json;

    fn full_day() -> DailyTimes {
        DailyTimes::new(vec![
            PrayerTime::new("04:30", "İmsak"),
            PrayerTime::new("06:02", "Güneş"),
            PrayerTime::new("13:10", "Öğle"),
            PrayerTime::new("16:31", "İkindi"),
            PrayerTime::new("19:45", "Akşam"),
            PrayerTime::new("21:09", "Yatsı"),
        ])
    }

    #[test]
    fn test_deserialize_response() {
        let body = json!({
            "success": true,
            "result": [
                { "saat": "04:30", "vakit": "İmsak" },
                { "saat": "19:45", "vakit": "Akşam" }
            ]
        });

        let response: PrayerResponse = serde_json::from_value(body).unwrap();
        assert!(response.success);
        assert_eq!(response.result.len(), 2);
        assert_eq!(response.result[0].clock_time, "04:30");
        assert_eq!(response.result[1].event_name, "Akşam");
    }

    #[test]
    fn test_deserialize_unsuccessful_without_result() {
        let response: PrayerResponse =
            serde_json::from_value(json!({ "success": false })).unwrap();
        assert!(!response.success);
        assert!(response.result.is_empty());
    }

    #[test]
    fn test_anchors_found() {
        let anchors = full_day().anchors().unwrap();
        assert_eq!(anchors.sahur, NaiveTime::from_hms_opt(4, 30, 0).unwrap());
        assert_eq!(anchors.iftar, NaiveTime::from_hms_opt(19, 45, 0).unwrap());
    }

    #[test]
    fn test_missing_iftar_has_no_anchors() {
        let times = DailyTimes::new(vec![
            PrayerTime::new("04:30", "İmsak"),
            PrayerTime::new("21:09", "Yatsı"),
        ]);
        assert_eq!(times.anchors(), None);
    }

    #[test]
    fn test_malformed_clock_time_is_treated_as_missing() {
        let times = DailyTimes::new(vec![
            PrayerTime::new("4.30", "İmsak"),
            PrayerTime::new("19:45", "Akşam"),
        ]);
        assert_eq!(times.anchors(), None);
    }

    #[test]
    fn test_is_anchor() {
        let day = full_day();
        let anchors: Vec<_> = day
            .entries()
            .iter()
            .filter(|t| t.is_anchor())
            .map(|t| t.event_name.as_str())
            .collect();
        assert_eq!(anchors, vec!["İmsak", "Akşam"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let day = DailyTimes::new(vec![PrayerTime::new("04:30", "İmsak")]);
        let value = serde_json::to_value(&day).unwrap();
        assert_eq!(value, json!([{ "saat": "04:30", "vakit": "İmsak" }]));
    }
}
