use std::fmt;

/// The ascending set of strategies one player is restricted to.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Support(Vec<usize>);

impl Support {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn indices(&self) -> &[usize] {
        &self.0
    }
    pub fn contains(&self, strategy: usize) -> bool {
        self.0.binary_search(&strategy).is_ok()
    }
    /// position of a full-game strategy within the block renumbering.
    pub fn position(&self, strategy: usize) -> Option<usize> {
        self.0.binary_search(&strategy).ok()
    }
    pub fn subset_of(&self, other: &Support) -> bool {
        self.0.iter().all(|&s| other.contains(s))
    }
}

impl From<Vec<usize>> for Support {
    fn from(mut indices: Vec<usize>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self(indices)
    }
}

impl fmt::Display for Support {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.0
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

/// One support per player: a candidate block of the full game.
///
/// Derived ordering is lexicographic over the per-player supports, which
/// matches the tie-break the enumeration order calls for.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SupportProfile(Vec<Support>);

impl SupportProfile {
    /// the unrestricted profile.
    pub fn full(strategies: &[usize]) -> Self {
        Self(strategies.iter().map(|&n| (0..n).collect::<Vec<_>>().into()).collect())
    }

    pub fn players(&self) -> usize {
        self.0.len()
    }
    pub fn supports(&self) -> &[Support] {
        &self.0
    }
    pub fn support(&self, player: usize) -> &Support {
        &self.0[player]
    }
    /// total strategy count across players.
    pub fn size(&self) -> usize {
        self.0.iter().map(Support::len).sum()
    }
    /// largest minus smallest per-player support size.
    pub fn spread(&self) -> usize {
        let sizes = self.0.iter().map(Support::len);
        sizes.clone().max().unwrap_or(0) - sizes.min().unwrap_or(0)
    }
    /// does `inner` sit inside this profile, player by player?
    pub fn contains(&self, inner: &SupportProfile) -> bool {
        inner
            .0
            .iter()
            .zip(self.0.iter())
            .all(|(small, large)| small.subset_of(large))
    }

    /// every cross-player combination of non-empty strategy subsets, ordered
    /// by total size ascending, then spread ascending, then lexicographic.
    /// smaller and more balanced blocks come first; the nesting prune in the
    /// enumeration depends on this order.
    pub fn exhaust(strategies: &[usize]) -> Vec<SupportProfile> {
        let sets = strategies
            .iter()
            .map(|&n| Self::powerset(n))
            .collect::<Vec<_>>();
        let mut profiles = sets
            .iter()
            .fold(vec![vec![]], |acc: Vec<Vec<Support>>, supports| {
                acc.iter()
                    .flat_map(|prefix| {
                        supports.iter().map(move |support| {
                            let mut next = prefix.clone();
                            next.push(support.clone());
                            next
                        })
                    })
                    .collect()
            })
            .into_iter()
            .map(SupportProfile)
            .collect::<Vec<_>>();
        profiles.sort_by(|a, b| {
            a.size()
                .cmp(&b.size())
                .then(a.spread().cmp(&b.spread()))
                .then(a.cmp(b))
        });
        profiles
    }

    /// non-empty subsets of 0..n, smallest first, lexicographic within a size.
    fn powerset(n: usize) -> Vec<Support> {
        let mut subsets = (1usize..1 << n)
            .map(|mask| (0..n).filter(|s| mask >> s & 1 == 1).collect::<Vec<_>>())
            .map(Support::from)
            .collect::<Vec<_>>();
        subsets.sort_by(|a, b| a.len().cmp(&b.len()).then(a.cmp(b)));
        subsets
    }
}

impl From<Vec<Support>> for SupportProfile {
    fn from(supports: Vec<Support>) -> Self {
        Self(supports)
    }
}
impl From<Vec<Vec<usize>>> for SupportProfile {
    fn from(supports: Vec<Vec<usize>>) -> Self {
        Self(supports.into_iter().map(Support::from).collect())
    }
}

impl fmt::Display for SupportProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(" × ")
        )
    }
}
