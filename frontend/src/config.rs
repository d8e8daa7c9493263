pub const WAITLIST_TABLE: &str = "waitlist_signups";

#[cfg(debug_assertions)]
pub fn get_supabase_url() -> &'static str {
    // Local Supabase stack when running with `supabase start`
    option_env!("SPAREVEST_SUPABASE_URL").unwrap_or("http://localhost:54321")
}

#[cfg(not(debug_assertions))]
pub fn get_supabase_url() -> &'static str {
    option_env!("SPAREVEST_SUPABASE_URL").unwrap_or("")
}

pub fn get_supabase_anon_key() -> &'static str {
    option_env!("SPAREVEST_SUPABASE_ANON_KEY").unwrap_or("")
}

pub fn get_signup_endpoint() -> String {
    format!(
        "{}/rest/v1/{}",
        get_supabase_url().trim_end_matches('/'),
        WAITLIST_TABLE
    )
}
