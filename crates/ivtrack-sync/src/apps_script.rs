//! The Google Apps Script receiver the settings view hands to users.
//! Kept verbatim so the deployed script and this client stay in step.

pub const APPS_SCRIPT_TEMPLATE: &str = r##"
/**
 * Google Apps Script to receive NICU IV Tracker data
 * 1. Open a Google Sheet
 * 2. Extensions > Apps Script
 * 3. Paste this code and click Save
 * 4. Deploy > New Deployment > Web App
 * 5. Execute as: Me, Who has access: Anyone
 * 6. Copy the Web App URL into the Tracker Settings
 */

function doPost(e) {
  try {
    var payload = JSON.parse(e.postData.contents);
    var data = payload.data;
    var ss = SpreadsheetApp.getActiveSpreadsheet();
    var sheet = ss.getSheetByName("NICU_Data") || ss.insertSheet("NICU_Data");

    // Set headers if sheet is empty
    if (sheet.getLastRow() === 0) {
      sheet.appendRow([
        "ID", "Date", "Provider", "Patient ID", "Age", "Sex",
        "Weight", "GA", "Type", "POCUS", "Attempts", "Outcome", "Comments"
      ]);
      sheet.getRange(1, 1, 1, 13).setFontWeight("bold").setBackground("#e2efda");
    }

    // Each sync is a full-list overwrite, not an append.
    sheet.getRange(2, 1, sheet.getLastRow() + 1, 13).clearContent();

    data.forEach(function(entry) {
      sheet.appendRow([
        entry.id,
        entry.procedureDateTime,
        entry.providerName,
        entry.patientStudyId,
        entry.patientAgeDays,
        entry.patientSex,
        entry.currentWeightGrams,
        entry.correctedGestationalAgeWeeks,
        entry.vascularAccessType,
        entry.pocusUsed ? "Yes" : "No",
        entry.totalAttempts,
        entry.finalOutcome,
        entry.comments
      ]);
    });

    return ContentService.createTextOutput("Success").setMimeType(ContentService.MimeType.TEXT);
  } catch (err) {
    return ContentService.createTextOutput("Error: " + err.message).setMimeType(ContentService.MimeType.TEXT);
  }
}
"##;
