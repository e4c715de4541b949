pub mod page;
pub mod sanseido;

pub use page::{DictionaryPage, FetchError, RelatedWordEntry, SearchResult};
pub use sanseido::SanseidoPage;
