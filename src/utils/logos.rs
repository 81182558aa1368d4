use serde::{Serialize, Serializer};

use crate::models::catalog_models::Certification;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationLogo {
    Nse12,
    Nse3,
    Nse45Cloud,
    Nse45Networking,
    Nse45Sase,
    Nse45Security,
    Nse67Cloud,
    Nse67Networking,
    Nse67Sase,
    Nse67Security,
    Nse8,
}

impl CertificationLogo {
    pub fn asset_path(&self) -> &'static str {
        match self {
            CertificationLogo::Nse12 => "/assets/NSE1-2.svg",
            CertificationLogo::Nse3 => "/assets/NSE3.svg",
            CertificationLogo::Nse45Cloud => "/assets/NSE4-5-Cloud.svg",
            CertificationLogo::Nse45Networking => "/assets/NSE4-5-Networking.svg",
            CertificationLogo::Nse45Sase => "/assets/NSE4-5-SASE.svg",
            CertificationLogo::Nse45Security => "/assets/NSE4-5-Security.svg",
            CertificationLogo::Nse67Cloud => "/assets/NSE6-7-Cloud.svg",
            CertificationLogo::Nse67Networking => "/assets/NSE6-7-Networking.svg",
            CertificationLogo::Nse67Sase => "/assets/NSE6-7-SASE.svg",
            CertificationLogo::Nse67Security => "/assets/NSE6-7-Security.svg",
            CertificationLogo::Nse8 => "/assets/NSE8.svg",
        }
    }
}

impl Serialize for CertificationLogo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.asset_path())
    }
}

// Keyword family of a certification name; checked in this order.
fn keyword_logo(cert_name: &str, cloud: CertificationLogo, networking: CertificationLogo, sase: CertificationLogo, security: CertificationLogo) -> Option<CertificationLogo> {
    if cert_name.contains("cloud") {
        Some(cloud)
    } else if cert_name.contains("network") {
        Some(networking)
    } else if cert_name.contains("sase") {
        Some(sase)
    } else if cert_name.contains("security") {
        Some(security)
    } else {
        None
    }
}

/// First matching rule wins; anything unmatched falls back to the NSE 1-2 icon.
pub fn certification_logo(cert: &Certification) -> CertificationLogo {
    let cert_name = cert.name.to_lowercase();
    let levels = cert.nse_levels.join(" ").to_lowercase();

    if levels.contains("nse 8") {
        return CertificationLogo::Nse8;
    }

    if levels.contains("nse 6") || levels.contains("nse 7") {
        if let Some(logo) = keyword_logo(
            &cert_name,
            CertificationLogo::Nse67Cloud,
            CertificationLogo::Nse67Networking,
            CertificationLogo::Nse67Sase,
            CertificationLogo::Nse67Security,
        ) {
            return logo;
        }
    }

    if levels.contains("nse 4") || levels.contains("nse 5") {
        if let Some(logo) = keyword_logo(
            &cert_name,
            CertificationLogo::Nse45Cloud,
            CertificationLogo::Nse45Networking,
            CertificationLogo::Nse45Sase,
            CertificationLogo::Nse45Security,
        ) {
            return logo;
        }
    }

    if levels.contains("nse 3") {
        return CertificationLogo::Nse3;
    }

    CertificationLogo::Nse12
}

/// Coarser per-course rule: digit containment checked from the highest tier down.
pub fn course_logo(nse_level: &str) -> CertificationLogo {
    let level = nse_level.to_lowercase();

    if level.contains('8') {
        CertificationLogo::Nse8
    } else if level.contains('7') || level.contains('6') {
        CertificationLogo::Nse67Security
    } else if level.contains('5') || level.contains('4') {
        CertificationLogo::Nse45Security
    } else if level.contains('3') {
        CertificationLogo::Nse3
    } else {
        CertificationLogo::Nse12
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(name: &str, levels: &[&str]) -> Certification {
        Certification {
            name: name.to_string(),
            nse_levels: levels.iter().map(|l| l.to_string()).collect(),
            courses: vec![],
        }
    }

    #[test]
    fn nse8_wins_over_keywords() {
        assert_eq!(certification_logo(&cert("Cloud Expert", &["NSE 7", "NSE 8"])), CertificationLogo::Nse8);
    }

    #[test]
    fn upper_tier_keywords() {
        assert_eq!(certification_logo(&cert("Public Cloud Security", &["NSE 6"])), CertificationLogo::Nse67Cloud);
        assert_eq!(certification_logo(&cert("Secure Networking", &["NSE 6", "NSE 7"])), CertificationLogo::Nse67Networking);
        assert_eq!(certification_logo(&cert("SASE", &["NSE 7"])), CertificationLogo::Nse67Sase);
        assert_eq!(certification_logo(&cert("Security Operations", &["NSE 6"])), CertificationLogo::Nse67Security);
    }

    #[test]
    fn middle_tier_keywords() {
        assert_eq!(certification_logo(&cert("Network Security", &["NSE 4", "NSE 5"])), CertificationLogo::Nse45Networking);
        assert_eq!(certification_logo(&cert("Endpoint Security", &["NSE 5"])), CertificationLogo::Nse45Security);
    }

    #[test]
    fn unmatched_keyword_falls_through_to_lower_rules() {
        assert_eq!(certification_logo(&cert("Operational Technology", &["NSE 3", "NSE 6"])), CertificationLogo::Nse3);
        assert_eq!(certification_logo(&cert("Operational Technology", &["NSE 6"])), CertificationLogo::Nse12);
    }

    #[test]
    fn malformed_levels_use_fallback() {
        assert_eq!(certification_logo(&cert("Anything", &[])), CertificationLogo::Nse12);
        assert_eq!(certification_logo(&cert("Cloud", &["level four"])), CertificationLogo::Nse12);
    }

    #[test]
    fn course_logo_checks_highest_digit_first() {
        assert_eq!(course_logo("NSE 8"), CertificationLogo::Nse8);
        assert_eq!(course_logo("NSE 6"), CertificationLogo::Nse67Security);
        assert_eq!(course_logo("NSE 4"), CertificationLogo::Nse45Security);
        assert_eq!(course_logo("NSE 3"), CertificationLogo::Nse3);
        assert_eq!(course_logo("NSE 2"), CertificationLogo::Nse12);
        assert_eq!(course_logo(""), CertificationLogo::Nse12);
    }

    #[test]
    fn serializes_as_asset_path() {
        assert_eq!(serde_json::to_string(&CertificationLogo::Nse3).unwrap(), "\"/assets/NSE3.svg\"");
    }
}
