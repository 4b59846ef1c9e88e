use super::{TechView, ViewModel};

impl ViewModel {
    pub(in crate::app) fn liked_technologies(&self) -> Vec<TechView> {
        let mut liked = Vec::new();
        for layer in self.catalog.layers() {
            for tech in layer.techs {
                if self.liked.contains(tech.name) {
                    liked.push(TechView { tech, layer });
                }
            }
        }

        liked
    }

    // Case-insensitive substring match over name and description. An empty
    // query matches nothing, not everything.
    pub(in crate::app) fn search_results(&self) -> Vec<TechView> {
        let query = self.search.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results = Vec::new();
        for layer in self.catalog.layers() {
            for tech in layer.techs {
                if tech.name.to_lowercase().contains(&query)
                    || tech.desc.to_lowercase().contains(&query)
                {
                    results.push(TechView { tech, layer });
                }
            }
        }

        results
    }

    pub(in crate::app) fn is_related(&self, name: &str) -> bool {
        let Some(selected) = self.selected else {
            return false;
        };

        if selected == name {
            return false;
        }

        let Some((_, tech)) = self.catalog.technology(selected) else {
            return false;
        };

        tech.related.iter().any(|related| *related == name)
    }

    pub(in crate::app) fn is_search_hit(&self, name: &str) -> bool {
        if self.search.trim().is_empty() {
            return false;
        }

        self.search_results()
            .iter()
            .any(|entry| entry.tech.name == name)
    }

    pub(in crate::app) fn selected_view(&self) -> Option<TechView> {
        let selected = self.selected?;
        let (layer, tech) = self.catalog.technology(selected)?;
        Some(TechView { tech, layer })
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Catalog, Layer, Technology};

    use super::super::ViewModel;

    static SELF_REF_LAYERS: &[Layer] = &[Layer {
        id: "alpha",
        name: "Alpha",
        name_ko: "알파",
        description: "self reference fixture",
        subdesc: "",
        accent: 0x123456,
        techs: &[
            Technology {
                name: "Alpha",
                desc: "lists itself as related",
                related: &["Alpha", "Beta"],
            },
            Technology {
                name: "Beta",
                desc: "plain",
                related: &[],
            },
        ],
    }];

    fn model() -> ViewModel {
        ViewModel::new(Catalog::new(), true)
    }

    #[test]
    fn empty_and_whitespace_queries_match_nothing() {
        let mut model = model();
        assert!(model.search_results().is_empty());

        model.set_search_query("   \t ");
        assert!(model.search_results().is_empty());
        assert!(!model.is_search_hit("Kafka"));
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut model = model();

        for query in ["kafka", "KAFKA", "KaFkA"] {
            model.set_search_query(query);
            let names: Vec<&str> = model
                .search_results()
                .iter()
                .map(|entry| entry.tech.name)
                .collect();
            assert_eq!(names, vec!["Kafka"], "query {query:?}");
        }
    }

    #[test]
    fn search_matches_descriptions_in_layer_then_tech_order() {
        let mut model = model();
        model.set_search_query("sql");

        let names: Vec<&str> = model
            .search_results()
            .iter()
            .map(|entry| entry.tech.name)
            .collect();

        // PostgreSQL and MySQL by name, MongoDB ("NoSQL") and dbt ("SQL
        // 기반") by description; storage layer precedes processing.
        assert_eq!(names, vec!["PostgreSQL", "MySQL", "MongoDB", "dbt"]);
    }

    #[test]
    fn search_hit_trims_surrounding_whitespace() {
        let mut model = model();
        model.set_search_query("  kafka  ");

        assert!(model.is_search_hit("Kafka"));
        assert!(!model.is_search_hit("Spark"));
    }

    #[test]
    fn liked_view_follows_catalog_order() {
        let mut model = model();
        model.toggle_like("PyTorch");
        model.toggle_like("AWS");
        model.toggle_like("Kafka");

        let liked = model.liked_technologies();
        let names: Vec<&str> = liked.iter().map(|entry| entry.tech.name).collect();

        assert_eq!(names, vec!["AWS", "Kafka", "PyTorch"]);
        assert_eq!(liked[0].layer.id, "infra");
        assert_eq!(liked[2].layer.id, "aiml");
    }

    #[test]
    fn related_marks_only_cross_references_of_selection() {
        let mut model = model();
        model.select_technology("Kafka");

        assert!(model.is_related("Spark"));
        assert!(model.is_related("Airflow"));
        assert!(model.is_related("PostgreSQL"));
        assert!(!model.is_related("Pandas"));
        assert!(!model.is_related("Kafka"));
    }

    #[test]
    fn kafka_selection_highlights_spark_in_processing_layer() {
        let mut model = model();
        model.select_technology("Kafka");
        model.expand_layer("processing");

        assert!(model.is_related("Spark"));
        assert!(!model.is_related("Pandas"));
        assert!(!model.is_related("dbt"));
        assert!(!model.is_related("Hadoop"));
    }

    #[test]
    fn selection_is_never_related_to_itself_even_when_listed() {
        let mut model = ViewModel::new(Catalog::from_layers(SELF_REF_LAYERS), true);
        model.select_technology("Alpha");

        assert!(!model.is_related("Alpha"));
        assert!(model.is_related("Beta"));
    }

    #[test]
    fn nothing_is_related_without_a_selection() {
        let model = model();
        assert!(!model.is_related("Spark"));
    }

    #[test]
    fn selected_view_resolves_owning_layer() {
        let mut model = model();
        model.select_technology("Kafka");

        let view = model.selected_view().unwrap();
        assert_eq!(view.tech.name, "Kafka");
        assert_eq!(view.layer.id, "ingestion");

        model.select_technology("Kafka");
        assert!(model.selected_view().is_none());
    }
}
