pub const CREATE_TABLES: &str = r"
    CREATE TABLE IF NOT EXISTS history(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        datetime TEXT NOT NULL,
        title TEXT NOT NULL,
        info TEXT NOT NULL
    );
";
