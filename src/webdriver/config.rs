/// Where the WebDriver server lives and what browser to ask it for.
#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub server: String,
    pub browser: String,
    pub headless: bool,
}

impl Default for WebDriverConfig {
    fn default() -> Self {
        Self {
            server: String::from(crate::WEBDRIVER_URL),
            browser: String::from(crate::WEBDRIVER_BROWSER),
            headless: false,
        }
    }
}

impl WebDriverConfig {
    /// New-session request body.
    pub fn capabilities(&self) -> serde_json::Value {
        let mut always = serde_json::json!({ "browserName": self.browser });
        if self.headless {
            match self.browser.as_str() {
                "firefox" => always["moz:firefoxOptions"] = serde_json::json!({ "args": ["-headless"] }),
                _ => always["goog:chromeOptions"] = serde_json::json!({ "args": ["--headless=new"] }),
            }
        }
        serde_json::json!({ "capabilities": { "alwaysMatch": always } })
    }
}
