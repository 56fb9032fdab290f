pub mod change_document_status;
pub mod create_document;
pub mod get_document_details;
pub mod list_documents;
pub mod record_payment;

pub use change_document_status::{
  ChangeDocumentStatusCommand, ChangeDocumentStatusResponse, ChangeDocumentStatusUseCase,
};
pub use create_document::{
  CreateDocumentCommand, CreateDocumentLineDto, CreateDocumentResponse, CreateDocumentUseCase,
  StockWarningDto,
};
pub use get_document_details::{
  GetDocumentDetailsCommand, GetDocumentDetailsResponse, GetDocumentDetailsUseCase,
};
pub use list_documents::{ListDocumentsCommand, ListDocumentsResponse, ListDocumentsUseCase};
pub use record_payment::{RecordPaymentCommand, RecordPaymentResponse, RecordPaymentUseCase};
