//! Geolocation Consolidator
//! Reduces raw geolocation rows to one representative row per zip prefix.

use crate::data::tables::{GEO_CITY, GEO_LAT, GEO_LNG, GEO_ZIP_CODE_PREFIX};
use polars::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Running aggregate for one zip prefix.
#[derive(Debug, Default)]
struct PrefixGroup {
    lat_sum: f64,
    lat_count: usize,
    lng_sum: f64,
    lng_count: usize,
    /// City counts in first-seen order.
    cities: Vec<(String, usize)>,
}

impl PrefixGroup {
    fn push(&mut self, lat: Option<f64>, lng: Option<f64>, city: Option<&str>) {
        if let Some(lat) = lat.filter(|v| !v.is_nan()) {
            self.lat_sum += lat;
            self.lat_count += 1;
        }
        if let Some(lng) = lng.filter(|v| !v.is_nan()) {
            self.lng_sum += lng;
            self.lng_count += 1;
        }
        if let Some(city) = city {
            match self.cities.iter_mut().find(|(name, _)| name == city) {
                Some((_, count)) => *count += 1,
                None => self.cities.push((city.to_string(), 1)),
            }
        }
    }

    fn mean_lat(&self) -> Option<f64> {
        (self.lat_count > 0).then(|| self.lat_sum / self.lat_count as f64)
    }

    fn mean_lng(&self) -> Option<f64> {
        (self.lng_count > 0).then(|| self.lng_sum / self.lng_count as f64)
    }

    /// Most frequent city; the earliest seen wins a tie.
    fn mode_city(&self) -> Option<&str> {
        let mut best: Option<&(String, usize)> = None;
        for entry in &self.cities {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(name, _)| name.as_str())
    }
}

/// Consolidate raw geolocation into one row per zip prefix.
///
/// Output columns: [prefix, mean lat, mean lng, most frequent city], with
/// prefixes in order of first appearance. Rows without a prefix are skipped.
pub fn consolidate(raw: &DataFrame) -> PolarsResult<DataFrame> {
    let prefixes = raw.column(GEO_ZIP_CODE_PREFIX)?.str()?;
    let lats = raw.column(GEO_LAT)?.f64()?;
    let lngs = raw.column(GEO_LNG)?.f64()?;
    let cities = raw.column(GEO_CITY)?.str()?;

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    let mut groups: Vec<PrefixGroup> = Vec::new();

    for (((prefix, lat), lng), city) in prefixes
        .into_iter()
        .zip(lats.into_iter())
        .zip(lngs.into_iter())
        .zip(cities.into_iter())
    {
        let Some(prefix) = prefix else {
            continue;
        };
        let slot = *index.entry(prefix).or_insert_with(|| {
            order.push(prefix);
            groups.push(PrefixGroup::default());
            groups.len() - 1
        });
        groups[slot].push(lat, lng, city);
    }

    debug!(
        raw_rows = raw.height(),
        prefixes = order.len(),
        "Consolidated geolocation"
    );

    let df = DataFrame::new(vec![
        Column::new(GEO_ZIP_CODE_PREFIX.into(), order),
        Column::new(
            GEO_LAT.into(),
            groups.iter().map(PrefixGroup::mean_lat).collect::<Vec<_>>(),
        ),
        Column::new(
            GEO_LNG.into(),
            groups.iter().map(PrefixGroup::mean_lng).collect::<Vec<_>>(),
        ),
        Column::new(
            GEO_CITY.into(),
            groups.iter().map(PrefixGroup::mode_city).collect::<Vec<_>>(),
        ),
    ])?;

    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, approx_eq};

    #[test]
    fn test_mode_city_and_mean_coordinates() {
        let raw = testing::geolocation(&[
            ("01310", -23.0, -46.0, Some("São Paulo")),
            ("01310", -24.0, -47.0, Some("Osasco")),
            ("01310", -25.0, -48.0, Some("São Paulo")),
        ]);

        let geo = consolidate(&raw).unwrap();
        assert_eq!(geo.height(), 1);
        assert_eq!(testing::strings(&geo, GEO_ZIP_CODE_PREFIX), vec!["01310"]);
        assert_eq!(testing::strings(&geo, GEO_CITY), vec!["São Paulo"]);

        let lat = geo.column(GEO_LAT).unwrap().f64().unwrap().get(0).unwrap();
        let lng = geo.column(GEO_LNG).unwrap().f64().unwrap().get(0).unwrap();
        assert!(approx_eq(lat, -24.0));
        assert!(approx_eq(lng, -47.0));
    }

    #[test]
    fn test_tie_goes_to_first_seen_city() {
        let raw = testing::geolocation(&[
            ("20040", -22.9, -43.1, Some("rio de janeiro")),
            ("20040", -22.9, -43.1, Some("niteroi")),
            ("20040", -22.9, -43.1, Some("niteroi")),
            ("20040", -22.9, -43.1, Some("rio de janeiro")),
        ]);

        let geo = consolidate(&raw).unwrap();
        assert_eq!(testing::strings(&geo, GEO_CITY), vec!["rio de janeiro"]);
    }

    #[test]
    fn test_one_row_per_prefix_in_first_seen_order() {
        let raw = testing::geolocation(&[
            ("30000", 1.0, 1.0, Some("b")),
            ("01000", 2.0, 2.0, Some("a")),
            ("30000", 3.0, 3.0, Some("b")),
            ("45000", 4.0, 4.0, Some("c")),
            ("01000", 5.0, 5.0, Some("a")),
        ]);

        let geo = consolidate(&raw).unwrap();
        assert_eq!(
            testing::strings(&geo, GEO_ZIP_CODE_PREFIX),
            vec!["30000", "01000", "45000"]
        );
    }

    #[test]
    fn test_missing_cities_are_ignored() {
        let raw = testing::geolocation(&[
            ("01000", 1.0, 1.0, None),
            ("01000", 1.0, 1.0, Some("campinas")),
            ("02000", 1.0, 1.0, None),
        ]);

        let geo = consolidate(&raw).unwrap();
        let cities: Vec<Option<&str>> = geo
            .column(GEO_CITY)
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(cities, vec![Some("campinas"), None]);
    }

    #[test]
    fn test_empty_input() {
        let geo = consolidate(&testing::geolocation(&[])).unwrap();
        assert_eq!(geo.height(), 0);
        assert_eq!(geo.width(), 4);
    }
}
