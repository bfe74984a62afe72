use log::warn;

/// A named band of page progress, e.g. "Programs" covering 20%..40%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub name: &'static str,
    pub start_percent: f64,
    pub end_percent: f64,
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl Section {
    pub fn contains(&self, percent: f64) -> bool {
        self.start_percent <= percent && percent <= self.end_percent
    }

    /// DOM id of the element the section starts at.
    pub fn anchor_id(&self) -> String {
        self.name.to_lowercase().replace(' ', "-")
    }
}

const ACADEMY_SECTIONS: [Section; 5] = [
    Section {
        name: "Hero",
        start_percent: 0.0,
        end_percent: 20.0,
        icon: "🏏",
        color: "#1e8449",
        description: "Welcome to the academy",
    },
    Section {
        name: "Programs",
        start_percent: 20.0,
        end_percent: 40.0,
        icon: "📋",
        color: "#2874a6",
        description: "Training programs for every age",
    },
    Section {
        name: "Features",
        start_percent: 40.0,
        end_percent: 60.0,
        icon: "⭐",
        color: "#b7950b",
        description: "Nets, bowling machines and video analysis",
    },
    Section {
        name: "Stats",
        start_percent: 60.0,
        end_percent: 80.0,
        icon: "📊",
        color: "#a04000",
        description: "Our record on and off the pitch",
    },
    Section {
        name: "Contact",
        start_percent: 80.0,
        end_percent: 100.0,
        icon: "✉️",
        color: "#6c3483",
        description: "Book a trial session",
    },
];

/// Ordered, immutable table of page sections.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionCatalog {
    sections: Vec<Section>,
}

impl SectionCatalog {
    pub fn new(sections: Vec<Section>) -> Self {
        report_defects(&sections);
        Self { sections }
    }

    /// The landing page layout.
    pub fn academy() -> Self {
        Self::new(ACADEMY_SECTIONS.to_vec())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn by_name(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    /// First section in table order whose range contains `percent`.
    /// Shared boundaries resolve to the earlier entry.
    pub fn section_at(&self, percent: f64) -> Option<&Section> {
        let percent = clamp_percent(percent);
        self.sections.iter().find(|s| s.contains(percent))
    }

    /// Absolute scroll offset at which `section` begins.
    pub fn offset_for_section(
        &self,
        section: &Section,
        document_height: f64,
        viewport_height: f64,
    ) -> f64 {
        let range = scrollable_range(document_height, viewport_height);
        let offset = clamp_percent(section.start_percent) / 100.0 * range;
        offset.clamp(0.0, range)
    }
}

pub(crate) fn clamp_percent(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Pixels the page can actually scroll; zero for degenerate geometry.
pub(crate) fn scrollable_range(document_height: f64, viewport_height: f64) -> f64 {
    let range = document_height - viewport_height;
    if range.is_finite() && range > 0.0 {
        range
    } else {
        0.0
    }
}

fn report_defects(sections: &[Section]) {
    for section in sections {
        if !(section.start_percent < section.end_percent) {
            warn!(
                "Section '{}' has an empty range {}..{}",
                section.name, section.start_percent, section.end_percent
            );
        }
        if section.start_percent < 0.0 || section.end_percent > 100.0 {
            warn!(
                "Section '{}' reaches outside 0..100 ({}..{})",
                section.name, section.start_percent, section.end_percent
            );
        }
    }

    for pair in sections.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.start_percent > prev.end_percent {
            warn!(
                "Progress {}..{} between '{}' and '{}' maps to no section",
                prev.end_percent, next.start_percent, prev.name, next.name
            );
        } else if next.start_percent < prev.end_percent {
            warn!(
                "Sections '{}' and '{}' overlap; '{}' wins the shared range",
                prev.name, next.name, prev.name
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(name: &'static str, start: f64, end: f64) -> Section {
        Section {
            name,
            start_percent: start,
            end_percent: end,
            icon: "",
            color: "",
            description: "",
        }
    }

    #[test]
    fn every_integer_percent_maps_to_a_section() {
        let catalog = SectionCatalog::academy();
        for percent in 0..=100 {
            assert!(
                catalog.section_at(percent as f64).is_some(),
                "no section for {}%",
                percent
            );
        }
    }

    #[test]
    fn shared_boundary_goes_to_earlier_section() {
        let catalog = SectionCatalog::academy();
        assert_eq!(catalog.section_at(20.0).unwrap().name, "Hero");
        assert_eq!(catalog.section_at(40.0).unwrap().name, "Programs");
        assert_eq!(catalog.section_at(50.0).unwrap().name, "Features");
        assert_eq!(catalog.section_at(100.0).unwrap().name, "Contact");
    }

    #[test]
    fn lookup_clamps_out_of_range_input() {
        let catalog = SectionCatalog::academy();
        assert_eq!(catalog.section_at(-15.0).unwrap().name, "Hero");
        assert_eq!(catalog.section_at(250.0).unwrap().name, "Contact");
        assert_eq!(catalog.section_at(f64::NAN).unwrap().name, "Hero");
    }

    #[test]
    fn gap_yields_no_section() {
        let catalog = SectionCatalog::new(vec![section("A", 0.0, 40.0), section("B", 60.0, 100.0)]);
        assert!(catalog.section_at(50.0).is_none());
        assert_eq!(catalog.section_at(60.0).unwrap().name, "B");
    }

    #[test]
    fn empty_catalog_has_no_sections() {
        let catalog = SectionCatalog::new(Vec::new());
        assert!(catalog.section_at(0.0).is_none());
    }

    #[test]
    fn offset_is_start_fraction_of_scrollable_range() {
        let catalog = SectionCatalog::academy();
        let features = *catalog.by_name("features").unwrap();
        assert_eq!(catalog.offset_for_section(&features, 2000.0, 1000.0), 400.0);

        let hero = catalog.sections()[0];
        assert_eq!(catalog.offset_for_section(&hero, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn offset_is_zero_when_page_does_not_scroll() {
        let catalog = SectionCatalog::academy();
        let contact = *catalog.by_name("Contact").unwrap();
        assert_eq!(catalog.offset_for_section(&contact, 800.0, 1000.0), 0.0);
        assert_eq!(catalog.offset_for_section(&contact, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn offset_clamps_sections_declared_past_the_end() {
        let catalog = SectionCatalog::new(vec![section("Tail", 120.0, 130.0)]);
        let tail = catalog.sections()[0];
        assert_eq!(catalog.offset_for_section(&tail, 3000.0, 1000.0), 2000.0);
    }

    #[test]
    fn anchor_id_is_lowercase() {
        assert_eq!(section("Our Coaches", 0.0, 1.0).anchor_id(), "our-coaches");
    }
}
