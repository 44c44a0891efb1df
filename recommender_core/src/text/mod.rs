mod stopwords;
mod tfidf;
mod tokenize;

pub use stopwords::{ENGLISH_STOP_WORDS, is_stop_word};
pub use tfidf::TfidfVectorizer;
pub use tokenize::tokenize;
