use rusqlite::Connection;
use tracing::info;

/// Run SQLite migrations
pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    info!("Running SQLite migrations");

    create_life_styles_table(conn)?;
    create_medical_histories_table(conn)?;
    create_medical_histories_index(conn)?;

    info!("SQLite migrations completed successfully");
    Ok(())
}

/// Create the lifestyle table
fn create_life_styles_table(conn: &Connection) -> Result<(), String> {
    info!("Creating life_styles table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS life_styles (
            l_id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id INTEGER,
            user_id INTEGER,
            smoking_status TEXT,
            alcohol_consumption TEXT,
            physical_activity TEXT,
            dietary_habits TEXT,
            sleep_pattern TEXT,
            stress_level TEXT
        )",
        [],
    ).map_err(|e| e.to_string())?;

    Ok(())
}

/// Create the medical history table
fn create_medical_histories_table(conn: &Connection) -> Result<(), String> {
    info!("Creating medical_histories table if not exists");

    conn.execute(
        "CREATE TABLE IF NOT EXISTS medical_histories (
            record_id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id INTEGER,
            user_id INTEGER,
            allergies TEXT,
            current_medication TEXT,
            past_medication TEXT,
            chronic_diseases TEXT,
            injuries TEXT,
            surgeries TEXT
        )",
        [],
    ).map_err(|e| e.to_string())?;

    Ok(())
}

/// Index backing the (patient_id, user_id) finder
fn create_medical_histories_index(conn: &Connection) -> Result<(), String> {
    info!("Creating index on patient_id, user_id");

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_medical_histories_patient_user
        ON medical_histories (patient_id, user_id)",
        [],
    ).map_err(|e| format!("Failed to create index: {}", e))?;

    Ok(())
}
