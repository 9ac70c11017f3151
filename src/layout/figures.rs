use std::collections::{BTreeSet, HashMap, HashSet};

use crate::paper::{Figure, StructuredPaper};

/// Where each declared figure goes, computed once before rendering.
pub(crate) struct FigurePlacements<'a> {
    /// Case-folded section heading → figures in declaration order.
    by_section: HashMap<String, Vec<&'a Figure>>,
    /// Figures whose placement names no section, in declaration order.
    unmatched: Vec<&'a Figure>,
    /// Every index some figure claims, in range or not.
    claimed: HashSet<usize>,
}

pub(crate) fn placement_key(heading: &str) -> String {
    heading.to_lowercase()
}

impl<'a> FigurePlacements<'a> {
    /// Out-of-range indices stay in the map; rendering skips them when the
    /// image lookup fails.
    pub(crate) fn resolve(paper: &'a StructuredPaper) -> Self {
        let headings: HashSet<String> = paper
            .sections
            .iter()
            .map(|s| placement_key(&s.heading))
            .collect();

        let mut by_section: HashMap<String, Vec<&'a Figure>> = HashMap::new();
        let mut unmatched = Vec::new();
        let mut claimed = HashSet::new();

        for fig in &paper.figures {
            claimed.insert(fig.index);
            let key = placement_key(&fig.placement);
            if headings.contains(&key) {
                by_section.entry(key).or_default().push(fig);
            } else {
                log::debug!(
                    "Figure {} placement {:?} matches no section heading",
                    fig.index,
                    fig.placement
                );
                unmatched.push(fig);
            }
        }

        Self {
            by_section,
            unmatched,
            claimed,
        }
    }

    pub(crate) fn for_section(&self, heading: &str) -> &[&'a Figure] {
        self.by_section
            .get(&placement_key(heading))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn unmatched(&self) -> &[&'a Figure] {
        &self.unmatched
    }

    /// Image indices below `image_count` that no figure refers to, ascending.
    pub(crate) fn unclaimed_images(&self, image_count: usize) -> BTreeSet<usize> {
        (0..image_count)
            .filter(|i| !self.claimed.contains(i))
            .collect()
    }
}
