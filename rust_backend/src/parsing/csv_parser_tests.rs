#[cfg(test)]
mod tests {
    use crate::core::domain::{AnnotatedRecord, CleanedRecord, ContentType, SentimentLabel, UNKNOWN};
    use crate::core::error::SchemaError;
    use crate::parsing::csv_parser::{
        dataframe_to_annotated_records, dataframe_to_records, parse_catalog_csv,
        parse_catalog_csv_str, records_to_dataframe, validate_catalog_schema, OUTPUT_COLUMNS,
    };
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description";

    /// Helper to create a temp CSV file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", content).unwrap();
        temp_file
    }

    fn cleaned(show_id: &str) -> CleanedRecord {
        CleanedRecord {
            show_id: Some(show_id.to_string()),
            content_type: ContentType::Movie,
            title: Some("Kota Factory".to_string()),
            director: UNKNOWN.to_string(),
            cast: "Mayur More, Jitendra Kumar".to_string(),
            country: "India".to_string(),
            date_added: Some("September 24, 2021".to_string()),
            release_year: Some(2021),
            rating: "TV-MA".to_string(),
            duration: "2 Seasons".to_string(),
            listed_in: Some("International TV Shows, Romantic TV Shows".to_string()),
            description: "In a city of coaching centers.".to_string(),
            date_added_parsed: NaiveDate::from_ymd_opt(2021, 9, 24),
            year_added: Some(2021),
            month_added: Some(9),
            primary_genre: "International TV Shows".to_string(),
        }
    }

    #[test]
    fn test_parse_catalog_csv_basic() {
        let csv = format!(
            "{}\ns1,Movie,Title,,,\"United States, India\",\"September 25, 2021\",2020,PG-13,90 min,Documentaries,A film.\n",
            HEADER
        );
        let temp_file = create_temp_csv(&csv);
        let df = parse_catalog_csv(temp_file.path()).unwrap();
        assert_eq!(df.height(), 1);

        let records = dataframe_to_records(&df).unwrap();
        assert_eq!(records[0].country.as_deref(), Some("United States, India"));
        assert_eq!(records[0].director, None);
        assert_eq!(records[0].date_added.as_deref(), Some("September 25, 2021"));
    }

    #[test]
    fn test_numeric_looking_columns_stay_text() {
        let csv = format!("{}\n007,Movie,1917,,,,,2019,18,119 min,Dramas,War.\n", HEADER);
        let df = parse_catalog_csv_str(&csv).unwrap();
        let records = dataframe_to_records(&df).unwrap();

        assert_eq!(records[0].show_id.as_deref(), Some("007"));
        assert_eq!(records[0].title.as_deref(), Some("1917"));
        assert_eq!(records[0].rating.as_deref(), Some("18"));
        assert_eq!(records[0].release_year, Some(2019));
    }

    #[test]
    fn test_show_id_is_optional() {
        let csv = "type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description\nMovie,T,,,,,2020,R,1 min,Dramas,D\n";
        let df = parse_catalog_csv_str(csv).unwrap();
        let records = dataframe_to_records(&df).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].show_id, None);
    }

    #[test]
    fn test_schema_reports_every_missing_column() {
        let df = parse_catalog_csv_str("title,description\nA,B\n").unwrap();
        let err: SchemaError = validate_catalog_schema(&df).unwrap_err();

        assert_eq!(err.missing_columns.len(), 9);
        assert!(err.missing_columns.contains(&"date_added".to_string()));
        assert!(err.missing_columns.contains(&"listed_in".to_string()));
        assert!(err.to_string().contains("rating"));
    }

    #[test]
    fn test_unparseable_release_year_becomes_none() {
        let csv = format!("{}\ns1,Movie,T,,,,,n/a,R,1 min,Dramas,D\n", HEADER);
        let df = parse_catalog_csv_str(&csv).unwrap();
        let records = dataframe_to_records(&df).unwrap();
        assert_eq!(records[0].release_year, None);
    }

    #[test]
    fn test_records_to_dataframe_column_order() {
        let records = vec![AnnotatedRecord::new(cleaned("s1"), 0.4)];
        let df = records_to_dataframe(&records).unwrap();

        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, OUTPUT_COLUMNS.to_vec());
        assert_eq!(df.height(), 1);
    }

    #[test]
    fn test_annotated_records_read_back() {
        let mut neutral = cleaned("s2");
        neutral.date_added_parsed = None;
        neutral.year_added = None;
        neutral.month_added = None;
        let records = vec![
            AnnotatedRecord::new(cleaned("s1"), 0.4),
            AnnotatedRecord::new(neutral, 0.0),
        ];
        let df = records_to_dataframe(&records).unwrap();
        let loaded = dataframe_to_annotated_records(&df).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].record, records[0].record);
        assert_eq!(loaded[0].sentiment_label, SentimentLabel::Positive);
        assert_eq!(loaded[1].record.date_added_parsed, None);
        assert_eq!(loaded[1].sentiment_label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_annotated_read_requires_output_columns() {
        let csv = format!("{}\ns1,Movie,T,,,,,2020,R,1 min,Dramas,D\n", HEADER);
        let df = parse_catalog_csv_str(&csv).unwrap();
        let err = dataframe_to_annotated_records(&df).unwrap_err();
        let schema = err.downcast_ref::<SchemaError>().unwrap();
        assert!(schema.missing_columns.contains(&"description_tone".to_string()));
    }
}
