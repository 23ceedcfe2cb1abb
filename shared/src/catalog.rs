use crate::models::Course;

/// The fixed, read-only course catalog.
///
/// Seeded with three courses and never mutated. Pages build one per render;
/// construction is a handful of string clones, so there is no reason to keep
/// it anywhere longer-lived.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            courses: vec![
                Course {
                    id: 1,
                    title: "Web Development".to_string(),
                    description: "HTML, CSS, JavaScript complete course".to_string(),
                    price: "$100".to_string(),
                },
                Course {
                    id: 2,
                    title: "React JS".to_string(),
                    description: "Build modern frontend apps with React".to_string(),
                    price: "$120".to_string(),
                },
                Course {
                    id: 3,
                    title: "Python Programming".to_string(),
                    description: "Learn Python from beginner to advanced".to_string(),
                    price: "$90".to_string(),
                },
            ],
        }
    }

    /// All courses, in catalog order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// First course whose id matches, if any.
    pub fn find_by_id(&self, id: u32) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Look a course up by a raw URL path segment.
    ///
    /// The segment comes straight out of the router, so it can be anything a
    /// user typed into the address bar. Non-numeric input (including empty,
    /// signed, or overflowing strings) is a miss, not an error.
    pub fn find_by_segment(&self, segment: &str) -> Option<&Course> {
        let id = segment.parse::<u32>().ok()?;
        self.find_by_id(id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_three_courses_in_order() {
        let catalog = Catalog::new();
        let ids: Vec<u32> = catalog.courses().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn find_by_id_returns_matching_course() {
        let catalog = Catalog::new();
        for id in 1..=3 {
            let course = catalog.find_by_id(id).unwrap();
            assert_eq!(course.id, id);
        }
    }

    #[test]
    fn find_by_id_misses_unknown_ids() {
        let catalog = Catalog::new();
        assert!(catalog.find_by_id(0).is_none());
        assert!(catalog.find_by_id(4).is_none());
        assert!(catalog.find_by_id(u32::MAX).is_none());
    }

    #[test]
    fn find_by_segment_accepts_numeric_segments() {
        let catalog = Catalog::new();
        assert_eq!(catalog.find_by_segment("1").unwrap().title, "Web Development");
        assert_eq!(catalog.find_by_segment("2").unwrap().title, "React JS");
        assert_eq!(catalog.find_by_segment("3").unwrap().title, "Python Programming");
    }

    #[test]
    fn find_by_segment_rejects_garbage() {
        let catalog = Catalog::new();
        for segment in ["abc", "", "-1", "0", "4", "1.5", " 2", "999999999999999999999"] {
            assert!(
                catalog.find_by_segment(segment).is_none(),
                "segment {segment:?} should not match a course"
            );
        }
    }

    #[test]
    fn course_two_matches_the_seed_fixture() {
        let catalog = Catalog::new();
        let course = catalog.find_by_segment("2").unwrap();
        assert_eq!(course.title, "React JS");
        assert_eq!(course.description, "Build modern frontend apps with React");
        assert_eq!(course.price, "$120");
    }

    #[test]
    fn course_serializes_round_trip() {
        let catalog = Catalog::new();
        let json = serde_json::to_string(catalog.courses()).unwrap();
        let back: Vec<crate::models::Course> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog.courses());
    }
}
