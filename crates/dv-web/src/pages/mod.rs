mod article;
mod articles;
mod home;

pub use article::ArticlePage;
pub use articles::ArticlesPage;
pub use home::HomePage;
