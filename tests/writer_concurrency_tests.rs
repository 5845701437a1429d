use cinelines::db::{ConversationDraft, LineDraft, Store};
use sqlx::SqlitePool;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;
use tokio::fs;

async fn seed_corpus(pool: &SqlitePool) {
    let stmts = [
        "INSERT INTO movies (movie_id, title, year, imdb_rating, imdb_votes, raw_script_url) \
         VALUES (1, 'blade gunner', 1982, 8.1, 700000, NULL)",
        "INSERT INTO characters (character_id, name, movie_id, gender, age) VALUES (10, 'AMY', 1, 'f', 25)",
        "INSERT INTO characters (character_id, name, movie_id, gender, age) VALUES (11, 'BICK', 1, 'm', 31)",
        "INSERT INTO conversations (conversation_id, character1_id, character2_id, movie_id) VALUES (100, 10, 11, 1)",
        "INSERT INTO lines (line_id, character_id, movie_id, conversation_id, line_sort, line_text) \
         VALUES (1000, 10, 1, 100, 1, 'hello there')",
    ];
    for stmt in stmts {
        sqlx::query(stmt).execute(pool).await.unwrap();
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn parallel_writes_get_distinct_ids_and_lose_nothing() {
    let tmp_dir = std::env::temp_dir();
    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);
    let db_file_name = format!("test_writer_concurrency_{}.sqlite", hasher.finish());
    let db_path = tmp_dir.join(db_file_name);
    let database_url = format!("sqlite:{}", db_path.to_str().unwrap());

    let store = Store::connect(&database_url).await.unwrap();
    seed_corpus(store.pool()).await;

    // 1. Fire 50 adds at once; the writer serializes them
    let mut handles = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let draft = ConversationDraft {
                movie_id: 1,
                character_1_id: 10,
                character_2_id: 11,
                lines: vec![LineDraft {
                    character_id: 10,
                    line_text: format!("concurrent line {i}"),
                }],
            };
            store.add_conversation(draft).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        let id = handle.await.unwrap().unwrap();
        ids.push(id);
    }

    // 2. Every call succeeded with a distinct id; with a single serialized
    //    writer and no deletes the ids are exactly the next 50 rowids
    ids.sort_unstable();
    let expected: Vec<i64> = (101..151).collect();
    assert_eq!(ids, expected);

    // 3. No conversation or line went missing
    let conversations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversations")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(conversations, 51);

    let lines: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lines")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(lines, 51);

    // 4. Each new conversation holds exactly its one line, sorted from 1
    let new_lines: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM lines WHERE conversation_id > 100")
            .fetch_one(store.pool())
            .await
            .unwrap();
    assert_eq!(new_lines, 50);

    let first_sorted: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM lines WHERE conversation_id > 100 AND line_sort = 1",
    )
    .fetch_one(store.pool())
    .await
    .unwrap();
    assert_eq!(first_sorted, 50);

    // Clean up the temporary database file
    let wal_path = std::path::PathBuf::from(format!("{}-wal", db_path.to_string_lossy()));
    let shm_path = std::path::PathBuf::from(format!("{}-shm", db_path.to_string_lossy()));
    let _ = fs::remove_file(&wal_path).await;
    let _ = fs::remove_file(&shm_path).await;
    fs::remove_file(&db_path).await.unwrap();
}
