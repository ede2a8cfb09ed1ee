pub struct Env {
    pub users_api_url: String,
    pub upload_latency_ms: u64,
    pub page_size: usize,
}

impl Env {
    fn new() -> Self {
        let users_api_url = std::env::var("USERS_API_URL")
            .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com/users".to_string());

        let upload_latency_ms = std::env::var("UPLOAD_LATENCY_MS")
            .unwrap_or_else(|_| "2000".to_string())
            .parse::<u64>()
            .expect("UPLOAD_LATENCY_MS must be a valid u64 integer");

        let page_size = std::env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .expect("PAGE_SIZE must be a valid usize integer");

        Env { users_api_url, upload_latency_ms, page_size }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
