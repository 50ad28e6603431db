pub const INSERT_INTO_HISTORY: &str = "
    INSERT INTO history (datetime, title, info) VALUES (?1, ?2, ?3)
";

pub const LOAD_HISTORY: &str = "
    SELECT id, datetime, title, info FROM history
    ORDER BY id DESC
";

pub const GET_HISTORY_ENTRY: &str = "
    SELECT id, datetime, title, info FROM history
    WHERE id = ?
";
