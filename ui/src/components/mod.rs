pub mod analysis_result;
pub mod file_upload;
pub mod markdown_text;
pub mod toast;

pub use analysis_result::AnalysisResultView;
pub use file_upload::FileUpload;
pub use markdown_text::MarkdownText;
pub use toast::ToastContainer;
