//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Code stored in preferences
    pub fn code(&self) -> &'static str {
        match self {
            Locale::EnUS => "en-US",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Parse a stored code; unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "zh-cn" | "zh" => Locale::ZhCN,
            _ => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("UI Catalog", "UI 组件目录"));

    // Navigation
    map.insert("nav-catalog", ("Components", "组件"));
    map.insert("nav-login", ("Sign in", "登录"));
    map.insert("nav-signup", ("Sign up", "注册"));
    map.insert("nav-dashboard", ("Dashboard", "仪表盘"));

    // Actions
    map.insert("action-sign-in", ("Sign in", "登录"));
    map.insert("action-signing-in", ("Signing in...", "登录中..."));
    map.insert("action-create-account", ("Create account", "创建账户"));
    map.insert("action-creating-account", ("Creating account...", "创建中..."));
    map.insert("action-sign-out", ("Sign out", "退出登录"));
    map.insert("action-export", ("Export CSV", "导出 CSV"));
    map.insert("action-previous", ("Previous", "上一页"));
    map.insert("action-next", ("Next", "下一页"));
    map.insert("action-open-modal", ("Open Modal", "打开对话框"));
    map.insert("action-close", ("Close", "关闭"));
    map.insert("action-save", ("Save preferences", "保存偏好"));
    map.insert("action-clear", ("Clear", "清除"));
    map.insert("action-edit", ("Edit", "编辑"));
    map.insert("action-delete", ("Delete", "删除"));

    // Auth
    map.insert("login-title", ("Sign in to your account", "登录您的账户"));
    map.insert("login-to-signup", ("Don't have an account? Sign up", "还没有账户？注册"));
    map.insert("signup-title", ("Create your account", "创建您的账户"));
    map.insert("signup-to-login", ("Already have an account? Sign in", "已有账户？登录"));
    map.insert("signup-accept-terms", ("I accept the terms and conditions", "我接受条款和条件"));

    // Form fields
    map.insert("field-email", ("Email", "邮箱"));
    map.insert("field-password", ("Password", "密码"));
    map.insert("field-first-name", ("First Name", "名"));
    map.insert("field-last-name", ("Last Name", "姓"));
    map.insert("field-confirm-password", ("Confirm Password", "确认密码"));
    map.insert("placeholder-email", ("Enter your email", "请输入邮箱"));
    map.insert("placeholder-password", ("Enter your password", "请输入密码"));

    // Dashboard
    map.insert("dashboard-projects", ("Projects Overview", "项目概览"));
    map.insert("dashboard-activity", ("Recent Activity", "最近动态"));
    map.insert("dashboard-search", ("Search...", "搜索..."));
    map.insert("dashboard-welcome", ("Signed in as {name}", "当前用户：{name}"));
    map.insert("filter-status", ("Status", "状态"));
    map.insert("filter-all", ("All", "全部"));
    map.insert("filter-date", ("Month", "月份"));
    map.insert("filter-page-size", ("{count} per page", "每页 {count} 条"));

    // Table
    map.insert("table-empty", ("No data", "暂无数据"));
    map.insert("table-loading", ("Loading...", "加载中..."));
    map.insert("table-page", ("Page {current} of {total}", "第 {current} 页，共 {total} 页"));
    map.insert("table-records", ("{count} records", "共 {count} 条"));
    map.insert("col-id", ("ID", "编号"));
    map.insert("col-name", ("Name", "名称"));
    map.insert("col-status", ("Status", "状态"));
    map.insert("col-date", ("Date", "日期"));
    map.insert("col-actions", ("Actions", "操作"));
    map.insert("col-age", ("Age", "年龄"));
    map.insert("col-email", ("Email", "邮箱"));
    map.insert("col-role", ("Role", "角色"));

    // Catalog sections
    map.insert("catalog-buttons", ("Buttons", "按钮"));
    map.insert("catalog-inputs", ("Inputs", "输入框"));
    map.insert("catalog-navigation", ("Navigation", "导航"));
    map.insert("catalog-modal", ("Modal", "对话框"));
    map.insert("catalog-tables", ("Tables", "表格"));
    map.insert("catalog-data-display", ("Data Display", "数据展示"));
    map.insert("catalog-form-controls", ("Form Controls", "表单控件"));
    map.insert("catalog-search-filter", ("Search & Filter", "搜索与筛选"));
    map.insert("catalog-radios", ("Radio Buttons", "单选按钮"));
    map.insert("catalog-switches", ("Switches", "开关"));
    map.insert("field-phone", ("Phone", "电话"));
    map.insert("placeholder-phone", ("+1 555 123 4567", "+86 138 0000 0000"));
    map.insert("error-phone", ("Please enter a valid phone number", "请输入有效的电话号码"));
    map.insert("action-logs", ("Logs", "日志"));
    map.insert("catalog-modal-body", ("This is a default modal.", "这是一个默认对话框。"));

    // Log panel
    map.insert("log-title", ("Activity Log", "活动日志"));
    map.insert("log-empty", ("No log entries", "暂无日志"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

/// Translate a key and substitute `{name}` placeholders
pub fn t_args(locale: Locale, key: &str, args: &[(&str, &str)]) -> SharedString {
    let mut text = t(locale, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    SharedString::from(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_and_fallback() {
        assert_eq!(t(Locale::EnUS, "nav-dashboard").as_ref(), "Dashboard");
        assert_eq!(t(Locale::ZhCN, "nav-dashboard").as_ref(), "仪表盘");
        assert_eq!(t(Locale::EnUS, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn test_t_args_substitutes() {
        let text = t_args(Locale::EnUS, "table-page", &[("current", "2"), ("total", "5")]);
        assert_eq!(text.as_ref(), "Page 2 of 5");
    }

    #[test]
    fn test_locale_codes() {
        assert_eq!(Locale::from_code("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_code("fr-FR"), Locale::EnUS);
        assert_eq!(Locale::from_code(Locale::ZhCN.code()), Locale::ZhCN);
    }
}
