#[cfg(test)]
mod tests {
    use crate::core::domain::ContentType;
    use crate::core::error::SchemaError;
    use crate::io::loaders::{AnnotatedCatalogLoader, CatalogLoader, CoordinatesLoader};
    use crate::io::writers::write_annotated_csv;
    use crate::transformations::Cleaner;
    use crate::sentiment::SentimentAnnotator;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    const CATALOG: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,\"As her father nears the end of his life, filmmaker Kirsten Johnson stages his death in inventive and comical ways.\"
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",\"After crossing paths at a party, a Cape Town teen sets out to prove whether a private-school swimming star is her sister who was abducted at birth.\"
s3,TV Show,Ganglands,Julien Leclercq,Sami Bouajila,,not a date,2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows\",\"To protect his family from a powerful drug lord, skilled thief Mehdi and his expert team of robbers are pulled into a violent and deadly turf war.\"
";

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_catalog_from_file() {
        let file = create_temp_csv(CATALOG);
        let result = CatalogLoader::load_from_file(file.path()).unwrap();

        assert_eq!(result.num_rows, 3);
        let records = result.into_records().unwrap();
        assert_eq!(records[1].content_type.as_deref(), Some("TV Show"));
        assert!(records[0].cast.is_none());
        assert!(records[2].country.is_none());
        assert_eq!(records[0].release_year, Some(2020));
    }

    #[test]
    fn test_load_rejects_unsupported_extension() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"[]").unwrap();

        let err = CatalogLoader::load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported file format"));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = CatalogLoader::load_from_file(std::path::Path::new("/nonexistent/catalog.csv"))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/catalog.csv"));
    }

    #[test]
    fn test_missing_columns_surface_as_schema_error() {
        let result = CatalogLoader::load_from_str("title,country\nA,India\n").unwrap();
        let err = result.into_records().unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().unwrap();
        assert!(schema.missing_columns.contains(&"description".to_string()));
        assert!(!schema.missing_columns.contains(&"country".to_string()));
    }

    #[test]
    fn test_annotated_catalog_round_trip_through_file() {
        let records = CatalogLoader::load_from_str(CATALOG)
            .unwrap()
            .into_records()
            .unwrap();
        let cleaned = Cleaner::default().clean_records(&records).records;
        let annotated = SentimentAnnotator::default().annotate(cleaned);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cleaned_netflix.csv");
        write_annotated_csv(&path, &annotated).unwrap();

        let loaded = AnnotatedCatalogLoader::load_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].record.content_type, ContentType::TvShow);
        assert_eq!(loaded[2].record.country, "Unknown");
        assert_eq!(loaded[2].record.date_added_parsed, None);
        assert_eq!(loaded[1].record.primary_genre, "International TV Shows");
        for (a, b) in annotated.iter().zip(&loaded) {
            assert_eq!(a.sentiment_label, b.sentiment_label);
            assert!((a.description_tone - b.description_tone).abs() < 1e-9);
        }
    }

    #[test]
    fn test_load_coordinates() {
        let file = create_temp_csv("country,lat,lon\nIndia,20.59,78.96\nJapan,36.2,138.25\n");
        let coords = CoordinatesLoader::load_from_file(file.path()).unwrap();
        assert_eq!(coords.len(), 2);
        assert_eq!(coords[1].country, "Japan");
    }
}
