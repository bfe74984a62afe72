// Static copy for the about and home pages.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub author: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coach {
    pub name: &'static str,
    pub title: &'static str,
    pub speciality: &'static str,
    pub experience_years: u8,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        author: "Priya Sharma",
        role: "Parent of a Junior Foundation student",
        quote: "My son went from barely holding a bat to opening for his school team in one season.",
        rating: 5,
    },
    Testimonial {
        author: "Arjun Mehta",
        role: "Elite Performance player",
        quote: "The video analysis sessions fixed a flaw in my action that three other coaches had missed.",
        rating: 5,
    },
    Testimonial {
        author: "Kavya Reddy",
        role: "Women's Cricket Program",
        quote: "A welcoming squad and coaches who take women's cricket seriously. I captain our league side now.",
        rating: 5,
    },
    Testimonial {
        author: "Rahul Verma",
        role: "Weekend Warriors",
        quote: "Perfect for someone with a desk job. Two mornings a week and my cover drive is back.",
        rating: 4,
    },
];

pub const COACHES: [Coach; 3] = [
    Coach {
        name: "Vikram Rao",
        title: "Head Coach",
        speciality: "Batting",
        experience_years: 18,
        bio: "Former first-class opener and Level 3 certified coach.",
    },
    Coach {
        name: "Sunita Iyer",
        title: "Women's Program Lead",
        speciality: "All-round",
        experience_years: 12,
        bio: "Played state cricket for a decade before moving into coaching.",
    },
    Coach {
        name: "Imran Qureshi",
        title: "Fast Bowling Coach",
        speciality: "Pace bowling",
        experience_years: 15,
        bio: "Specialises in injury-free actions and biomechanics.",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { value: "1,200+", label: "Students trained" },
    Stat { value: "45", label: "State-level selections" },
    Stat { value: "8", label: "Full-time coaches" },
    Stat { value: "15", label: "Years of coaching" },
];

/// Wrapping index over a fixed number of slides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Out of range targets are ignored.
    pub fn go_to(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carousel_wraps_both_ways() {
        let c = Carousel::new(3);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.go_to(1).next().index(), 2);
    }

    #[test]
    fn carousel_ignores_bad_targets() {
        let c = Carousel::new(2).go_to(1);
        assert_eq!(c.go_to(5).index(), 1);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let c = Carousel::new(0);
        assert!(c.is_empty());
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
    }

    #[test]
    fn ratings_are_out_of_five() {
        assert!(TESTIMONIALS.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
