// Pair-key lookup derived from https://stackoverflow.com/a/45795699/5960285

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use crate::catalog::{Category, Platform};

trait KeyPair<A, B> {
    /// Obtains the first element of the pair.
    fn a(&self) -> &A;
    /// Obtains the second element of the pair.
    fn b(&self) -> &B;
}

impl<'a, A, B> Borrow<dyn KeyPair<A, B> + 'a> for (A, B)
    where
        A: Eq + Hash + 'a,
        B: Eq + Hash + 'a,
{
    fn borrow(&self) -> &(dyn KeyPair<A, B> + 'a) {
        self
    }
}

impl<A: Hash, B: Hash> Hash for dyn KeyPair<A, B> + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a().hash(state);
        self.b().hash(state);
    }
}

impl<A: Eq, B: Eq> PartialEq for dyn KeyPair<A, B> + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.a() == other.a() && self.b() == other.b()
    }
}

impl<A: Eq, B: Eq> Eq for dyn KeyPair<A, B> + '_ {}

impl<A, B> KeyPair<A, B> for (A, B) {
    fn a(&self) -> &A {
        &self.0
    }
    fn b(&self) -> &B {
        &self.1
    }
}

impl<A, B> KeyPair<A, B> for (&A, &B) {
    fn a(&self) -> &A {
        self.0
    }
    fn b(&self) -> &B {
        self.1
    }
}

/// Hash map keyed by an owned pair that can be queried with borrowed halves.
#[derive(Debug)]
pub struct MultiKeyHashMap<A: Eq + Hash, B: Eq + Hash, C> {
    map: HashMap<(A, B), C>,
}

impl<A: Eq + Hash, B: Eq + Hash, C> MultiKeyHashMap<A, B, C> {
    pub fn get(&self, a: &A, b: &B) -> Option<&C> {
        self.map.get(&(a, b) as &dyn KeyPair<A, B>)
    }

    /// Keeps the first value stored for a key.
    pub fn insert_first(&mut self, a: A, b: B, v: C) {
        self.map.entry((a, b)).or_insert(v);
    }
}

impl<A: Eq + Hash, B: Eq + Hash, C> Default for MultiKeyHashMap<A, B, C> {
    fn default() -> Self {
        MultiKeyHashMap {
            map: HashMap::new()
        }
    }
}

/// Outcome of following a platform's category reference.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// `sub` is `None` when the platform has no sub-category.
    Resolved {
        category: &'a Category,
        sub: Option<&'a str>
    },
    MissingCategory,
    MissingSubCategory {
        category: &'a Category
    }
}

impl Resolution<'_> {
    pub fn is_orphan(&self) -> bool {
        !matches!(self, Resolution::Resolved { .. })
    }
}

/// Lookup from main-category names (and `(main, sub)` pairs) to category records.
///
/// Built fresh from a category snapshot for each query. When several
/// categories share a main name the first one wins, the same one a linear
/// search would find.
pub struct CategoryIndex<'a> {
    by_main: HashMap<&'a str, &'a Category>,
    subs: MultiKeyHashMap<String, String, usize>
}

impl<'a> CategoryIndex<'a> {
    pub fn build(categories: &'a [Category]) -> Self {
        let mut by_main = HashMap::new();
        let mut subs = MultiKeyHashMap::default();

        for category in categories {
            if by_main.contains_key(category.main.as_str()) {
                continue;
            }
            by_main.insert(category.main.as_str(), category);

            for (position, sub) in category.subs.iter().enumerate() {
                subs.insert_first(category.main.clone(), sub.clone(), position);
            }
        }

        CategoryIndex { by_main, subs }
    }

    pub fn get(&self, main: &str) -> Option<&'a Category> {
        self.by_main.get(main).copied()
    }

    /// Sub-category options for a main category, empty when it is unknown.
    pub fn subs_of(&self, main: &str) -> &'a [String] {
        self.get(main).map(|c| c.subs.as_slice()).unwrap_or(&[])
    }

    pub fn color_of(&self, main: &str) -> Option<&'a str> {
        self.get(main).map(|c| c.color.as_str())
    }

    pub fn resolve(&self, platform: &Platform) -> Resolution<'a> {
        let category = match self.get(&platform.main_category) {
            Some(category) => category,
            None => return Resolution::MissingCategory
        };

        if platform.sub_category.is_empty() {
            return Resolution::Resolved { category, sub: None };
        }

        match self.subs.get(&platform.main_category, &platform.sub_category) {
            Some(&position) => Resolution::Resolved { category, sub: Some(category.subs[position].as_str()) },
            None => Resolution::MissingSubCategory { category }
        }
    }

    /// Platforms whose category or sub-category no longer exists.
    pub fn orphans<'p>(&self, platforms: &'p [Platform]) -> Vec<&'p Platform> {
        platforms.iter()
            .filter(|p| self.resolve(p).is_orphan())
            .collect()
    }
}
