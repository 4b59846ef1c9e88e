use std::collections::HashMap;

mod data;

#[derive(Debug)]
pub struct Layer {
    pub id: &'static str,
    pub name: &'static str,
    pub name_ko: &'static str,
    pub description: &'static str,
    pub subdesc: &'static str,
    pub accent: u32,
    pub techs: &'static [Technology],
}

#[derive(Debug)]
pub struct Technology {
    pub name: &'static str,
    pub desc: &'static str,
    pub related: &'static [&'static str],
}

pub struct Catalog {
    layers: &'static [Layer],
    accent_by_name: HashMap<&'static str, u32>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::from_layers(data::LAYERS)
    }

    pub fn from_layers(layers: &'static [Layer]) -> Self {
        let mut accent_by_name = HashMap::new();
        for layer in layers {
            for tech in layer.techs {
                accent_by_name.insert(tech.name, layer.accent);
            }
        }

        Self {
            layers,
            accent_by_name,
        }
    }

    pub fn layers(&self) -> &'static [Layer] {
        self.layers
    }

    pub fn layer(&self, id: &str) -> Option<&'static Layer> {
        self.layers.iter().find(|layer| layer.id == id)
    }

    pub fn technology(&self, name: &str) -> Option<(&'static Layer, &'static Technology)> {
        self.layers.iter().find_map(|layer| {
            layer
                .techs
                .iter()
                .find(|tech| tech.name == name)
                .map(|tech| (layer, tech))
        })
    }

    pub fn accent_of(&self, name: &str) -> Option<u32> {
        self.accent_by_name.get(name).copied()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn technology_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.techs.len()).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn technology_names_are_globally_unique() {
        let catalog = Catalog::new();
        let mut seen = HashSet::new();

        for layer in catalog.layers() {
            for tech in layer.techs {
                assert!(
                    seen.insert(tech.name),
                    "duplicate technology name: {}",
                    tech.name
                );
            }
        }

        assert_eq!(seen.len(), catalog.technology_count());
    }

    #[test]
    fn every_technology_maps_to_its_owning_layer_accent() {
        let catalog = Catalog::new();

        for layer in catalog.layers() {
            for tech in layer.techs {
                assert_eq!(catalog.accent_of(tech.name), Some(layer.accent));
            }
        }
    }

    #[test]
    fn accent_lookup_misses_unknown_names() {
        let catalog = Catalog::new();
        assert_eq!(catalog.accent_of("FORTRAN"), None);
    }

    #[test]
    fn layer_lookup_by_id() {
        let catalog = Catalog::new();

        let processing = catalog.layer("processing");
        assert!(processing.is_some_and(|layer| layer.name == "Processing"));
        assert!(catalog.layer("firmware").is_none());
    }

    #[test]
    fn technology_lookup_returns_owning_layer() {
        let catalog = Catalog::new();

        let (layer, tech) = catalog.technology("Kafka").unwrap();
        assert_eq!(layer.id, "ingestion");
        assert!(tech.related.contains(&"Spark"));
    }

    #[test]
    fn catalog_shape_matches_dataset() {
        let catalog = Catalog::new();
        assert_eq!(catalog.layer_count(), 6);
        assert_eq!(catalog.technology_count(), 31);
    }
}
