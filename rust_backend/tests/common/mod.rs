//! Shared fixtures for integration tests.

#![allow(dead_code)]

use netflix_insights::core::domain::AnnotatedRecord;
use netflix_insights::io::loaders::CatalogLoader;
use netflix_insights::sentiment::SentimentAnnotator;
use netflix_insights::transformations::Cleaner;

/// A small slice of the real catalog, including the usual data problems:
/// missing directors and countries, multi-valued fields, a malformed date,
/// a missing rating and an empty description.
pub const SAMPLE_CATALOG: &str = "\
show_id,type,title,director,cast,country,date_added,release_year,rating,duration,listed_in,description
s1,Movie,Dick Johnson Is Dead,Kirsten Johnson,,United States,\"September 25, 2021\",2020,PG-13,90 min,Documentaries,\"As her father nears the end of his life, filmmaker Kirsten Johnson stages his death in inventive and comical ways to help them both face the inevitable.\"
s2,TV Show,Blood & Water,,\"Ama Qamata, Khosi Ngema, Gail Mabalane\",South Africa,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, TV Dramas, TV Mysteries\",\"After crossing paths at a party, a Cape Town teen sets out to prove whether a private-school swimming star is her sister who was abducted at birth.\"
s3,TV Show,Ganglands,Julien Leclercq,\"Sami Bouajila, Tracy Gotoas\",,\"September 24, 2021\",2021,TV-MA,1 Season,\"Crime TV Shows, International TV Shows, TV Action & Adventure\",\"To protect his family from a powerful drug lord, skilled thief Mehdi and his expert team of robbers are pulled into a violent and deadly turf war.\"
s4,Movie,My Little Pony: A New Generation,\"Robert Cullen, José Luis Ucha\",\"Vanessa Hudgens, Kimiko Glenn\",,2021-09-24,2021,PG,91 min,Children & Family Movies,\"Equestria's divided. But a bright-eyed hero believes Earth Ponies, Pegasi and Unicorns should be pals, and, hoof to heart, she's determined to prove it.\"
s5,Movie,Sankofa,Haile Gerima,\"Kofi Ghanaba, Oyafunmike Ogunlano\",\"United States, Ghana, Burkina Faso, United Kingdom, Germany, Ethiopia\",\"September 24, 2021\",1993,,125 min,\"Dramas, Independent Movies, International Movies\",\"On a photo shoot in Ghana, an American model slips back in time, becomes enslaved on a plantation and bears witness to the agony of her ancestral past.\"
s6,TV Show,Kota Factory,,\"Mayur More, Jitendra Kumar\",India,\"September 24, 2021\",2021,TV-MA,2 Seasons,\"International TV Shows, Romantic TV Shows, TV Comedies\",
";

pub const SAMPLE_COORDINATES: &str = "\
country,lat,lon
United States,37.09,-95.71
South Africa,-30.56,22.94
India,20.59,78.96
";

pub fn annotated_sample() -> Vec<AnnotatedRecord> {
    let records = CatalogLoader::load_from_str(SAMPLE_CATALOG)
        .and_then(|r| r.into_records())
        .expect("sample catalog parses");
    let cleaned = Cleaner::default().clean_records(&records).records;
    SentimentAnnotator::default().annotate(cleaned)
}
