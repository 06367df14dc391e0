//! Icon catalog: the subset of glyph names a poster draws from, with integer weights.

use {
  crate::error::Result,
  anyhow::Context,
  rand::{distributions::{Distribution, WeightedIndex}, Rng},
  std::collections::BTreeSet
};


/// Names used when no glyph set is available.
pub const FALLBACK_NAMES: [&str; 5] = ["circle", "square", "triangle", "hexagon", "star"];
pub const MAX_WEIGHT: u32 = 10;
pub const DEFAULT_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
  pub name: String,
  pub weight: u32
}

/// Unique names in selection order, each with a weight in `1..=MAX_WEIGHT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
  entries: Vec<CatalogEntry>
}

#[derive(Debug, Copy, Clone)]
pub enum CatalogSource<'a> {
  Fallback,
  Names(&'a [String])
}

fn random_weight(rng: &mut impl Rng) -> u32 {
  rng.gen_range(1..=MAX_WEIGHT)
}

/// Select up to `count` distinct names from `source`, uniformly, each with a random weight.
pub fn build_catalog<R: Rng>(source: CatalogSource<'_>, count: usize, rng: &mut R) -> Catalog {
  let mut catalog = Catalog::default();
  match source {
    CatalogSource::Fallback => FALLBACK_NAMES.iter()
      .for_each(|name| {
        let weight = random_weight(rng);
        catalog.entries.push(CatalogEntry { name: name.to_string(), weight });
      }),
    CatalogSource::Names(names) => {
      let available = names.iter().collect::<BTreeSet<_>>().len();
      let mut chosen = BTreeSet::new();
      while catalog.len() < count.min(available) {
        let name = &names[rng.gen_range(0..names.len())];
        if chosen.insert(name.as_str()) {
          let weight = random_weight(rng);
          catalog.entries.push(CatalogEntry { name: name.clone(), weight });
        }
      }
    }
  }
  catalog
}

impl Catalog {
  pub fn entries(&self) -> &[CatalogEntry] { &self.entries }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn contains(&self, name: &str) -> bool {
    self.entries.iter().any(|entry| entry.name == name)
  }

  pub fn total_weight(&self) -> u32 {
    self.entries.iter().map(|entry| entry.weight).sum()
  }

  /// Probability of drawing `name` with [`IconSampler::pick`].
  pub fn probability(&self, name: &str) -> f64 {
    let total = self.total_weight();
    self.entries.iter()
      .find(|entry| entry.name == name)
      .filter(|_| total > 0)
      .map_or(0.0, |entry| entry.weight as f64 / total as f64)
  }

  pub fn sampler(&self) -> Result<IconSampler<'_>> {
    let index = WeightedIndex::new(self.entries.iter().map(|entry| entry.weight))
      .context("cannot sample icons from an empty catalog")?;
    Ok(IconSampler { catalog: self, index })
  }
}

/// Draws catalog names with probability `weight / total_weight`, with replacement.
#[derive(Debug, Clone)]
pub struct IconSampler<'a> {
  catalog: &'a Catalog,
  index: WeightedIndex<u32>
}

impl<'a> IconSampler<'a> {
  pub fn pick<R: Rng>(&self, rng: &mut R) -> &'a str {
    &self.catalog.entries[self.index.sample(rng)].name
  }
}

/// One weighted draw from `catalog`.
pub fn pick_icon<'a, R: Rng>(catalog: &'a Catalog, rng: &mut R) -> Result<&'a str> {
  Ok(catalog.sampler()?.pick(rng))
}
