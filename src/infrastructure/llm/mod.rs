mod gemini_client;

pub use gemini_client::{
    Candidate, CandidateContent, CandidatePart, DEFAULT_MODEL, FileMetadata, FileUploadResponse,
    GeminiClient, GenerateContentResponse, extract_text,
};
