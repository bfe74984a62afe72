#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterTag {
    #[default]
    All,
    Junior,
    Youth,
    Adult,
    Women,
    Weekend,
    Elite,
}

impl FilterTag {
    pub const ALL_TAGS: [FilterTag; 7] = [
        FilterTag::All,
        FilterTag::Junior,
        FilterTag::Youth,
        FilterTag::Adult,
        FilterTag::Women,
        FilterTag::Weekend,
        FilterTag::Elite,
    ];

    /// Parses a filter button value. Anything unrecognised shows everything.
    pub fn from_label(label: &str) -> FilterTag {
        Self::ALL_TAGS
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(FilterTag::All)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterTag::All => "all",
            FilterTag::Junior => "junior",
            FilterTag::Youth => "youth",
            FilterTag::Adult => "adult",
            FilterTag::Women => "women",
            FilterTag::Weekend => "weekend",
            FilterTag::Elite => "elite",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterTag::All => "All Programs",
            FilterTag::Junior => "Junior",
            FilterTag::Youth => "Youth",
            FilterTag::Adult => "Adult",
            FilterTag::Women => "Women's",
            FilterTag::Weekend => "Weekend",
            FilterTag::Elite => "Elite",
        }
    }
}

/// One enrollable training program.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferingRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: &'static str,
    pub age_group: &'static str,
    /// Whole rupees per month.
    pub price: u32,
    pub tags: &'static [FilterTag],
    pub duration: &'static str,
    pub schedule: &'static str,
    pub highlights: &'static [&'static str],
}

impl OfferingRecord {
    pub fn has_tag(&self, tag: FilterTag) -> bool {
        tag == FilterTag::All || self.tags.contains(&tag)
    }

    /// `needle` must already be lowercase.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [self.title, self.description, self.level]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    pub fn formatted_price(&self) -> String {
        let digits = self.price.to_string();
        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("₹{}/month", grouped)
    }
}

pub fn academy_programs() -> Vec<OfferingRecord> {
    vec![
        OfferingRecord {
            id: "little-champs",
            title: "Little Champs",
            description: "A playful introduction to cricket: throwing, catching and the joy of hitting a ball.",
            level: "Beginner",
            age_group: "5-8 years",
            price: 2_500,
            tags: &[FilterTag::Junior, FilterTag::Weekend],
            duration: "3 months",
            schedule: "Sat & Sun, 8-9 AM",
            highlights: &["Soft-ball drills", "Coordination games", "Parent sessions"],
        },
        OfferingRecord {
            id: "junior-foundation",
            title: "Junior Foundation",
            description: "Core batting and bowling technique for young cricketers building their game.",
            level: "Beginner",
            age_group: "8-12 years",
            price: 3_500,
            tags: &[FilterTag::Junior],
            duration: "6 months",
            schedule: "Mon, Wed, Fri, 4-6 PM",
            highlights: &["Technique basics", "Match simulations", "Fitness for kids"],
        },
        OfferingRecord {
            id: "youth-development",
            title: "Youth Development",
            description: "Structured cricket coaching for teenagers aiming at school and district teams.",
            level: "Intermediate",
            age_group: "12-16 years",
            price: 4_500,
            tags: &[FilterTag::Youth],
            duration: "6 months",
            schedule: "Tue, Thu, Sat, 4-7 PM",
            highlights: &["Video analysis", "Tournament exposure", "Strength and conditioning"],
        },
        OfferingRecord {
            id: "elite-performance",
            title: "Elite Performance",
            description: "High-intensity training for players preparing for state and national selection.",
            level: "Advanced",
            age_group: "16+ years",
            price: 8_000,
            tags: &[FilterTag::Youth, FilterTag::Elite],
            duration: "12 months",
            schedule: "Daily, 6-9 AM",
            highlights: &["Bowling machine sessions", "Mental conditioning", "Personal coach"],
        },
        OfferingRecord {
            id: "adult-recreational",
            title: "Adult Recreational",
            description: "Evening nets and friendly matches for adults who love the game.",
            level: "All levels",
            age_group: "18+ years",
            price: 3_000,
            tags: &[FilterTag::Adult],
            duration: "3 months",
            schedule: "Tue & Thu, 7-9 PM",
            highlights: &["Evening nets", "Weekend fixtures", "Social league"],
        },
        OfferingRecord {
            id: "womens-cricket",
            title: "Women's Cricket Program",
            description: "Dedicated coaching pathway for girls and women at every stage of the game.",
            level: "All levels",
            age_group: "10+ years",
            price: 3_500,
            tags: &[FilterTag::Women, FilterTag::Youth, FilterTag::Adult],
            duration: "6 months",
            schedule: "Mon, Wed, Sat, 5-7 PM",
            highlights: &["Women coaches", "League matches", "Leadership workshops"],
        },
        OfferingRecord {
            id: "weekend-warriors",
            title: "Weekend Warriors",
            description: "Compact weekend cricket sessions for busy professionals and students.",
            level: "Intermediate",
            age_group: "16+ years",
            price: 2_800,
            tags: &[FilterTag::Adult, FilterTag::Weekend],
            duration: "3 months",
            schedule: "Sat & Sun, 7-10 AM",
            highlights: &["Match practice", "Skill clinics", "Flexible batches"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unknown_label_falls_back_to_all() {
        assert_eq!(FilterTag::from_label("junior"), FilterTag::Junior);
        assert_eq!(FilterTag::from_label(" WOMEN "), FilterTag::Women);
        assert_eq!(FilterTag::from_label("seniors"), FilterTag::All);
        assert_eq!(FilterTag::from_label(""), FilterTag::All);
    }

    #[test]
    fn program_ids_are_unique() {
        let programs = academy_programs();
        let ids: HashSet<_> = programs.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), programs.len());
    }

    #[test]
    fn every_filter_tag_has_programs() {
        let programs = academy_programs();
        for tag in FilterTag::ALL_TAGS {
            assert!(programs.iter().any(|p| p.has_tag(tag)), "{:?} is empty", tag);
        }
    }

    #[test]
    fn price_is_grouped() {
        let mut program = academy_programs()[0].clone();
        assert_eq!(program.formatted_price(), "₹2,500/month");
        program.price = 950;
        assert_eq!(program.formatted_price(), "₹950/month");
        program.price = 1_250_000;
        assert_eq!(program.formatted_price(), "₹1,250,000/month");
    }
}
