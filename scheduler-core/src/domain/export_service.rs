//! Export service domain logic for the family scheduler.
//!
//! This module contains all business logic related to exporting the schedule
//! as a JSON snapshot, including orchestration of the raw store reads,
//! document generation, and file operations. The UI should only handle
//! presentation concerns.

use anyhow::Result;
use chrono::Utc;
use log::{error, info};
use serde::Serialize;
use std::fs;

use crate::domain::availability_service::AvailabilityService;
use crate::domain::member_service::MemberService;
use crate::storage::{KeyValueStore, AVAILABILITIES_KEY, MEMBERS_KEY};
use shared::{ExportDataResponse, ExportToPathRequest, ExportToPathResponse};

/// Snapshot document shape: each collection embedded as its raw persisted
/// string, `null` when that key was never written. Keeping the strings
/// untouched means the snapshot mirrors the store byte for byte.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportDocument {
    family_members: Option<String>,
    availabilities: Option<String>,
}

/// Export service that handles all export-related business logic
#[derive(Clone)]
pub struct ExportService {
    // No internal state needed for now
}

impl ExportService {
    /// Create a new ExportService instance
    pub fn new() -> Self {
        Self {}
    }

    /// Build a ready-to-save schedule snapshot with complete orchestration
    pub fn export_snapshot(
        &self,
        store: &dyn KeyValueStore,
        member_service: &MemberService,
        availability_service: &AvailabilityService,
    ) -> Result<ExportDataResponse> {
        info!("📄 EXPORT: Building schedule snapshot");

        // Step 1: Read both collections exactly as persisted
        let document = ExportDocument {
            family_members: store.get(MEMBERS_KEY)?,
            availabilities: store.get(AVAILABILITIES_KEY)?,
        };

        // Step 2: Pretty-print the snapshot document
        let json_content = serde_json::to_string_pretty(&document)?;

        // Step 3: Counts for the frontend notice, from the loaded collections
        let member_count = member_service.list_members()?.members.len();
        let availability_count = availability_service
            .list_availabilities()?
            .availabilities
            .len();

        // Step 4: Generate filename with current date
        let now = Utc::now();
        let filename = format!("family-schedule-{}.json", now.format("%Y-%m-%d"));

        let response = ExportDataResponse {
            json_content,
            filename,
            member_count,
            availability_count,
        };

        info!(
            "✅ EXPORT: Snapshot holds {} members and {} availability entries ({} bytes) with filename: {}",
            response.member_count,
            response.availability_count,
            response.json_content.len(),
            response.filename
        );

        Ok(response)
    }

    /// Export the snapshot directly to a specified path (or default location)
    /// with complete orchestration
    pub fn export_to_path(
        &self,
        request: ExportToPathRequest,
        store: &dyn KeyValueStore,
        member_service: &MemberService,
        availability_service: &AvailabilityService,
    ) -> Result<ExportToPathResponse> {
        info!("📁 EXPORT: Exporting to path - custom_path: {:?}", request.custom_path);

        // Step 1: Build the snapshot using the existing logic
        let snapshot = self.export_snapshot(store, member_service, availability_service)?;

        // Step 2: Determine the export directory
        let export_dir = match request.custom_path.clone() {
            Some(custom_path) if !custom_path.trim().is_empty() => {
                // Basic path sanitization: remove quotes, trim whitespace, handle common issues
                let cleaned_path = self.sanitize_path(&custom_path);
                std::path::PathBuf::from(cleaned_path)
            }
            _ => {
                // Use default location: Documents folder, then home
                match dirs::document_dir() {
                    Some(docs_dir) => docs_dir,
                    None => match dirs::home_dir() {
                        Some(home_dir) => home_dir,
                        None => {
                            error!("❌ EXPORT: Could not determine default export directory");
                            return Ok(ExportToPathResponse {
                                success: false,
                                message: "Failed to determine export directory".to_string(),
                                file_path: String::new(),
                                member_count: 0,
                                availability_count: 0,
                            });
                        }
                    },
                }
            }
        };

        // Step 3: Ensure the directory exists
        if let Err(e) = fs::create_dir_all(&export_dir) {
            error!("❌ EXPORT: Failed to create export directory {:?}: {}", export_dir, e);
            return Ok(ExportToPathResponse {
                success: false,
                message: format!("Failed to create export directory: {}", e),
                file_path: export_dir.to_string_lossy().to_string(),
                member_count: 0,
                availability_count: 0,
            });
        }

        // Step 4: Write the file
        let file_path = export_dir.join(&snapshot.filename);
        match fs::write(&file_path, &snapshot.json_content) {
            Ok(_) => {
                let file_path_str = file_path.to_string_lossy().to_string();
                info!(
                    "✅ EXPORT: Successfully exported {} members and {} availability entries to: {}",
                    snapshot.member_count, snapshot.availability_count, file_path_str
                );

                Ok(ExportToPathResponse {
                    success: true,
                    message: format!("File exported successfully to: {}", file_path_str),
                    file_path: file_path_str,
                    member_count: snapshot.member_count,
                    availability_count: snapshot.availability_count,
                })
            }
            Err(e) => {
                error!("❌ EXPORT: Failed to write export file to {:?}: {}", file_path, e);
                Ok(ExportToPathResponse {
                    success: false,
                    message: format!("Failed to write export file: {}", e),
                    file_path: file_path.to_string_lossy().to_string(),
                    member_count: 0,
                    availability_count: 0,
                })
            }
        }
    }

    /// Basic path sanitization to handle common user input issues
    fn sanitize_path(&self, path: &str) -> String {
        let mut cleaned = path.trim().to_string();

        // Remove surrounding quotes (single or double); a lone quote starts
        // and ends with itself and is not a pair
        if cleaned.len() >= 2
            && ((cleaned.starts_with('"') && cleaned.ends_with('"'))
                || (cleaned.starts_with('\'') && cleaned.ends_with('\'')))
        {
            cleaned = cleaned[1..cleaned.len() - 1].to_string();
        }

        // Trim again after quote removal
        cleaned = cleaned.trim().to_string();

        // Handle escaped spaces (common on some systems)
        cleaned = cleaned.replace("\\ ", " ");

        // Remove any trailing slashes/backslashes
        while cleaned.ends_with('/') || cleaned.ends_with('\\') {
            cleaned.pop();
        }

        // Handle tilde expansion for home directory
        if cleaned.starts_with('~') {
            if let Some(home) = dirs::home_dir() {
                if cleaned == "~" {
                    cleaned = home.to_string_lossy().to_string();
                } else if cleaned.starts_with("~/") || cleaned.starts_with("~\\") {
                    cleaned = home.join(&cleaned[2..]).to_string_lossy().to_string();
                }
            }
        }

        cleaned
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}
