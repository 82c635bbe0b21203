//! Static ATM catalog and the online-only filter

use super::types::{Atm, AtmStatus};

/// The bundled sample locations, one per major Canadian city
pub fn sample_atms() -> Vec<Atm> {
    use AtmStatus::*;
    vec![
        Atm::new(1, "Toronto", Online).at(43.6532, -79.3832),
        Atm::new(2, "Montreal", Offline).at(45.5017, -73.5673),
        Atm::new(3, "Vancouver", Online).at(49.2827, -123.1207),
        Atm::new(4, "Calgary", Online).at(51.0447, -114.0719),
        Atm::new(5, "Ottawa", Offline).at(45.4215, -75.6972),
        Atm::new(6, "Edmonton", Online).at(53.5461, -113.4938),
        Atm::new(7, "Winnipeg", Online).at(49.8951, -97.1384),
        Atm::new(8, "Quebec City", Offline).at(46.8139, -71.2080),
    ]
}

/// Return every ATM, or only the online ones. Order is preserved.
pub fn filter_atms(atms: &[Atm], online_only: bool) -> Vec<Atm> {
    if online_only {
        atms.iter().filter(|a| a.is_online()).cloned().collect()
    } else {
        atms.to_vec()
    }
}

/// Look up an ATM by id
pub fn find_atm(atms: &[Atm], id: u32) -> Option<&Atm> {
    atms.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        let atms = sample_atms();
        let mut ids: Vec<u32> = atms.iter().map(|a| a.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), atms.len());
        assert!(atms.iter().all(|a| a.coordinates().is_some()));
    }

    #[test]
    fn test_online_only_is_exact_subset() {
        let atms = sample_atms();
        let online = filter_atms(&atms, true);

        assert_eq!(online.len(), 5);
        assert!(online.iter().all(|a| a.status == AtmStatus::Online));

        let excluded: Vec<_> = atms.iter().filter(|a| !online.contains(*a)).collect();
        assert!(excluded.iter().all(|a| a.status == AtmStatus::Offline));
        assert_eq!(excluded.len(), 3);
    }

    #[test]
    fn test_filter_keeps_order() {
        let online = filter_atms(&sample_atms(), true);
        let ids: Vec<u32> = online.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 6, 7]);
    }

    #[test]
    fn test_no_filter_returns_everything() {
        let atms = sample_atms();
        assert_eq!(filter_atms(&atms, false), atms);
    }

    #[test]
    fn test_find_atm() {
        let atms = sample_atms();
        assert_eq!(find_atm(&atms, 3).map(|a| a.location.as_str()), Some("Vancouver"));
        assert!(find_atm(&atms, 99).is_none());
    }
}
