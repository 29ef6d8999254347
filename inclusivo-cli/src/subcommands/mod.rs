mod annotate;
pub use annotate::AnnotateApp;

mod rewrite;
pub use rewrite::RewriteApp;
