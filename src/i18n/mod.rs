//! Output languages and localized interface text

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "ko")]
    Ko,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::ZhTw, Language::En, Language::Ja, Language::Ko];

    pub fn code(self) -> &'static str {
        match self {
            Language::ZhTw => "zh-TW",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Ko => "ko",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Selector label, in the language itself.
    pub fn label(self) -> &'static str {
        match self {
            Language::ZhTw => "繁體中文",
            Language::En => "English",
            Language::Ja => "日本語",
            Language::Ko => "한국어",
        }
    }

    /// Name inserted into generation prompts.
    pub fn prompt_name(self) -> &'static str {
        match self {
            Language::ZhTw => "Traditional Chinese (Taiwan)",
            Language::En => "English",
            Language::Ja => "Japanese",
            Language::Ko => "Korean",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::ZhTw => Language::En,
            Language::En => Language::Ja,
            Language::Ja => Language::Ko,
            Language::Ko => Language::ZhTw,
        }
    }

    pub fn text(self) -> &'static UiText {
        match self {
            Language::ZhTw => &ZH_TW,
            Language::En => &EN,
            Language::Ja => &JA,
            Language::Ko => &KO,
        }
    }
}

pub struct UiText {
    pub title: &'static str,
    pub hero: &'static str,
    pub placeholder: &'static str,
    pub generating: &'static str,
    pub error: &'static str,
    pub image_error: &'static str,
    pub trending: &'static str,
    pub my_palettes: &'static str,
    pub no_history: &'static str,
    pub add_palette: &'static str,
    pub adjust: &'static str,
    pub done: &'static str,
    pub back: &'static str,
    pub design_advice: &'static str,
    pub visualize: &'static str,
    pub painting: &'static str,
    pub keywords: &'static str,
    pub export: &'static str,
    pub exported: &'static str,
    pub copied: &'static str,
    pub palette_name: &'static str,
    pub palette_desc: &'static str,
    pub color_codes: &'static str,
    pub invalid_hex: &'static str,
    pub create: &'static str,
    pub cancel: &'static str,
}

static ZH_TW: UiText = UiText {
    title: "心情調色盤",
    hero: "描述一種心情，產生專屬配色",
    placeholder: "例如：安靜的海邊清晨",
    generating: "正在調色…",
    error: "產生調色盤失敗，請再試一次。",
    image_error: "產生意境圖失敗。",
    trending: "熱門配色",
    my_palettes: "我的調色盤",
    no_history: "還沒有調色盤，輸入心情開始吧！",
    add_palette: "新增調色盤",
    adjust: "調整",
    done: "完成",
    back: "返回",
    design_advice: "設計建議",
    visualize: "生成意境圖",
    painting: "繪製中…",
    keywords: "畫面關鍵字（選填）",
    export: "匯出圖片",
    exported: "已匯出",
    copied: "已複製",
    palette_name: "名稱",
    palette_desc: "描述",
    color_codes: "色碼",
    invalid_hex: "色碼格式錯誤",
    create: "建立",
    cancel: "取消",
};

static EN: UiText = UiText {
    title: "Mood Palette",
    hero: "Describe a mood, get a palette",
    placeholder: "e.g. calm morning beach",
    generating: "Mixing colors…",
    error: "Failed to generate palette. Please try again.",
    image_error: "Failed to generate mood image.",
    trending: "Trending",
    my_palettes: "My Palettes",
    no_history: "No palettes yet. Describe a mood to start!",
    add_palette: "Add Palette",
    adjust: "Adjust",
    done: "Done",
    back: "Back",
    design_advice: "Design Advice",
    visualize: "Visualize",
    painting: "Painting…",
    keywords: "Image keywords (optional)",
    export: "Export Image",
    exported: "Exported",
    copied: "Copied",
    palette_name: "Name",
    palette_desc: "Description",
    color_codes: "Color Codes",
    invalid_hex: "Invalid hex code",
    create: "Create",
    cancel: "Cancel",
};

static JA: UiText = UiText {
    title: "ムードパレット",
    hero: "気分を言葉にして、配色をつくろう",
    placeholder: "例：静かな朝の海辺",
    generating: "色を調合中…",
    error: "パレットの生成に失敗しました。もう一度お試しください。",
    image_error: "イメージ画像の生成に失敗しました。",
    trending: "人気",
    my_palettes: "マイパレット",
    no_history: "まだパレットがありません。気分を入力してみましょう！",
    add_palette: "パレットを追加",
    adjust: "調整",
    done: "完了",
    back: "戻る",
    design_advice: "デザインのヒント",
    visualize: "イメージを生成",
    painting: "描画中…",
    keywords: "画像キーワード（任意）",
    export: "画像を書き出す",
    exported: "書き出しました",
    copied: "コピーしました",
    palette_name: "名前",
    palette_desc: "説明",
    color_codes: "カラーコード",
    invalid_hex: "無効なカラーコード",
    create: "作成",
    cancel: "キャンセル",
};

static KO: UiText = UiText {
    title: "무드 팔레트",
    hero: "분위기를 설명하면 팔레트를 만들어 드려요",
    placeholder: "예: 고요한 아침 바닷가",
    generating: "색을 섞는 중…",
    error: "팔레트 생성에 실패했습니다. 다시 시도해 주세요.",
    image_error: "무드 이미지 생성에 실패했습니다.",
    trending: "인기",
    my_palettes: "내 팔레트",
    no_history: "아직 팔레트가 없습니다. 분위기를 입력해 보세요!",
    add_palette: "팔레트 추가",
    adjust: "편집",
    done: "완료",
    back: "뒤로",
    design_advice: "디자인 조언",
    visualize: "이미지 생성",
    painting: "그리는 중…",
    keywords: "이미지 키워드 (선택)",
    export: "이미지 내보내기",
    exported: "내보냈습니다",
    copied: "복사됨",
    palette_name: "이름",
    palette_desc: "설명",
    color_codes: "색상 코드",
    invalid_hex: "잘못된 색상 코드",
    create: "만들기",
    cancel: "취소",
};
