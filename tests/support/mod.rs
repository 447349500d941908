pub mod mock_document;
pub mod mock_editor;
