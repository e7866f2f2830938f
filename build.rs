//! Build script for phc-crypto.
//!
//! This emits compile-time warnings for security-sensitive feature flags.

fn main() {
    // Emit a compile-time warning when legacy-digests feature is enabled
    #[cfg(feature = "legacy-digests")]
    {
        // Note: Using single-colon syntax for MSRV 1.75.0 compatibility
        println!("cargo:warning=SECURITY WARNING: The 'legacy-digests' feature is enabled.");
        println!("cargo:warning=PBKDF2 can now derive with HMAC-SHA-1 and HMAC-MD5.");
        println!("cargo:warning=Use it only to verify existing records; hash new passwords with SHA-256 or better.");
    }
}
