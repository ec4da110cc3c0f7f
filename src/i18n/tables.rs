use lazy_static::lazy_static;
use std::collections::BTreeMap;

pub type MessageTable = BTreeMap<&'static str, &'static str>;

lazy_static! {
    pub(super) static ref EN: MessageTable = [
        ("extName", "Marble World Inspector"),
        ("extDescription", "Show world details, prompts and export files on marble.worldlabs.ai"),
        // content script
        ("showWorldDetails", "Show world details"),
        ("worldDetails", "World Details"),
        ("close", "Close"),
        ("loadingWorldData", "Loading world data..."),
        ("failedToLoadWorldData", "Failed to load world data"),
        ("by", "by $1"),
        ("unknown", "Unknown"),
        ("stats", "Stats"),
        ("likes", "$1 likes"),
        ("prompt", "Prompt"),
        ("noPromptAvailable", "No prompt available"),
        ("copyPrompt", "Copy Prompt"),
        ("copied", "Copied!"),
        ("inputImage", "Input Image"),
        ("inputImageAlt", "Input image"),
        ("downloadImage", "Download Image"),
        ("model", "Model"),
        ("exportFiles", "Export Files"),
        ("downloadQuality", "Download $1"),
        // popup
        ("popupTitle", "WorldLabs Extension Settings"),
        ("popupLoading", "Loading..."),
        ("languageSetting", "Language Settings"),
        ("selectLanguage", "Select Display Language"),
        ("currentLanguage", "Current Language"),
        ("extensionStatus", "Extension Status"),
        ("extensionEnabled", "Extension is enabled"),
        ("instructions", "Instructions"),
        ("instruction1", "Visit marble.worldlabs.ai to use the extension"),
        ("instruction2", "Click the 📋 button on world pages to view details"),
        ("instruction3", "Language settings are applied immediately"),
        ("saveSettings", "Save Settings"),
        ("settingsSaved", "Settings saved successfully!"),
    ]
    .into_iter()
    .collect();

    pub(super) static ref ZH_CN: MessageTable = [
        ("extName", "Marble 世界查看器"),
        ("extDescription", "在 marble.worldlabs.ai 上显示世界详情、提示词和导出文件"),
        ("showWorldDetails", "显示世界详情"),
        ("worldDetails", "世界详情"),
        ("close", "关闭"),
        ("loadingWorldData", "正在加载世界数据..."),
        ("failedToLoadWorldData", "加载世界数据失败"),
        ("by", "作者：$1"),
        ("unknown", "未知"),
        ("stats", "统计"),
        ("likes", "$1 个赞"),
        ("prompt", "提示词"),
        ("noPromptAvailable", "暂无提示词"),
        ("copyPrompt", "复制提示词"),
        ("copied", "已复制！"),
        ("inputImage", "输入图片"),
        ("inputImageAlt", "输入图片"),
        ("downloadImage", "下载图片"),
        ("model", "模型"),
        ("exportFiles", "导出文件"),
        ("downloadQuality", "下载 $1"),
        ("popupTitle", "WorldLabs 扩展设置"),
        ("popupLoading", "加载中..."),
        ("languageSetting", "语言设置"),
        ("selectLanguage", "选择显示语言"),
        ("currentLanguage", "当前语言"),
        ("extensionStatus", "扩展状态"),
        ("extensionEnabled", "扩展已启用"),
        ("instructions", "使用说明"),
        ("instruction1", "访问 marble.worldlabs.ai 使用扩展功能"),
        ("instruction2", "在世界页面点击 📋 按钮查看详情"),
        ("instruction3", "语言设置会立即生效"),
        ("saveSettings", "保存设置"),
        ("settingsSaved", "设置保存成功！"),
    ]
    .into_iter()
    .collect();
}
