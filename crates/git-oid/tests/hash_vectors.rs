use git_oid::hasher::Hasher;
use git_oid::{ObjectId, Shortener};

// ── SHA-1 raw digest test vectors ───────────────────────────────────

#[test]
fn sha1_empty_string() {
    let oid = Hasher::digest(b"").unwrap();
    assert_eq!(
        oid.to_hex(),
        "da39a3ee5e6b4b0d3255bfef95601890afd80709"
    );
}

#[test]
fn sha1_hello_world() {
    let oid = Hasher::digest(b"hello world").unwrap();
    assert_eq!(
        oid.to_hex(),
        "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed"
    );
}

// ── git hash-object compatible test vectors ──────────────────────────
// These match `git hash-object --stdin` output.
// git prepends "blob <len>\0" to the content before hashing.

#[test]
fn git_hash_object_empty_blob() {
    let oid = Hasher::hash_object("blob", b"").unwrap();
    assert_eq!(
        oid.to_hex(),
        "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391"
    );
}

#[test]
fn git_hash_object_hello_world() {
    let oid = Hasher::hash_object("blob", b"hello world").unwrap();
    assert_eq!(
        oid.to_hex(),
        "95d09f2b10159347eece71399a7e2e907ea3df4f"
    );
}

#[test]
fn git_hash_object_hello_world_newline() {
    let oid = Hasher::hash_object("blob", b"Hello, World!\n").unwrap();
    assert_eq!(
        oid.to_hex(),
        "8ab686eafeb1f44702738c8b0f24f2567c36da6d"
    );
}

// ── Streaming hash (multi-chunk) ────────────────────────────────────

#[test]
fn streaming_matches_oneshot() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let oneshot = Hasher::digest(data).unwrap();

    let mut hasher = Hasher::new();
    for chunk in data.chunks(7) {
        hasher.update(chunk);
    }
    let streamed = hasher.finalize().unwrap();

    assert_eq!(oneshot, streamed);
}

#[test]
fn write_trait() {
    use std::io::Write;

    let data = b"hello world";
    let expected = Hasher::digest(data).unwrap();

    let mut hasher = Hasher::default();
    hasher.write_all(data).unwrap();
    let result = hasher.finalize().unwrap();

    assert_eq!(expected, result);
}

#[test]
fn object_kind_changes_id() {
    let data = b"some content";
    let blob = Hasher::hash_object("blob", data).unwrap();
    let tree = Hasher::hash_object("tree", data).unwrap();
    let commit = Hasher::hash_object("commit", data).unwrap();

    assert_ne!(blob, tree);
    assert_ne!(blob, commit);
    assert_ne!(tree, commit);
}

// ── Hashed ids flowing into the codec and shortener ─────────────────

#[test]
fn hash_result_display_parse_roundtrip() {
    let oid = Hasher::hash_object("blob", b"test content").unwrap();
    let hex = oid.to_string();
    let parsed: ObjectId = hex.parse().unwrap();
    assert_eq!(oid, parsed);
}

#[test]
fn well_known_blobs_abbreviate_at_floor() {
    let empty = Hasher::hash_object("blob", b"").unwrap();
    let hello = Hasher::hash_object("blob", b"hello world").unwrap();

    let mut shortener = Shortener::new(7).unwrap();
    shortener.add(&empty.to_hex()).unwrap();
    // e69de29... and 95d09f2... differ in the first digit
    assert_eq!(shortener.add(&hello.to_hex()).unwrap(), 7);
    assert_eq!(shortener.abbreviate(&empty), "e69de29");
    assert_eq!(shortener.abbreviate(&hello), "95d09f2");
}
