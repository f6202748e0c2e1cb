// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! English and Hindi UI text.
//!
//! Every string the app shows is a [`Message`] variant and [`t`] matches on
//! all of them, so adding a message without both translations does not compile.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FinanceError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
        }
    }

    /// The other language, for a language toggle.
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Hi,
            Language::Hi => Language::En,
        }
    }
}

impl FromStr for Language {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "hi" | "hindi" => Ok(Language::Hi),
            other => Err(FinanceError::UnknownLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    // Navigation
    Dashboard,
    Expenses,
    Goals,
    Invest,
    Profile,
    // Dashboard
    Welcome,
    MonthlyOverview,
    TotalExpenses,
    Savings,
    QuickActions,
    AddExpense,
    ViewGoals,
    // Expenses
    AddNewExpense,
    Amount,
    Category,
    Description,
    Food,
    Transport,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    Other,
    // Income sources
    Salary,
    Overtime,
    Bonus,
    Freelance,
    Rental,
    // Goals
    SavingsGoals,
    CreateGoal,
    GoalName,
    TargetAmount,
    CurrentAmount,
    // Investment
    InvestmentRecommendations,
    Disclaimer,
    DisclaimerText,
    // Common
    Save,
    Cancel,
    Submit,
    Loading,
    Error,
    Success,
    Rupees,
    // Reports
    Income,
    TotalIncome,
    NetIncome,
    AvailableForInvestment,
    Month,
    Date,
    Source,
    Share,
    Id,
    Remaining,
    Progress,
    Status,
    DaysLeft,
    TargetReached,
    Completed,
    TierExcellent,
    TierGood,
    TierFair,
    TierLow,
    TierCritical,
    Risk,
    Timeframe,
    Platform,
    SuggestedAmount,
    Features,
    Website,
    NoRecommendations,
    NoRecords,
    ExpenseAdded,
    IncomeAdded,
    GoalCreated,
    GoalUpdated,
}

impl Message {
    pub const ALL: &'static [Message] = &[
        Message::Dashboard,
        Message::Expenses,
        Message::Goals,
        Message::Invest,
        Message::Profile,
        Message::Welcome,
        Message::MonthlyOverview,
        Message::TotalExpenses,
        Message::Savings,
        Message::QuickActions,
        Message::AddExpense,
        Message::ViewGoals,
        Message::AddNewExpense,
        Message::Amount,
        Message::Category,
        Message::Description,
        Message::Food,
        Message::Transport,
        Message::Utilities,
        Message::Healthcare,
        Message::Entertainment,
        Message::Shopping,
        Message::Education,
        Message::Other,
        Message::Salary,
        Message::Overtime,
        Message::Bonus,
        Message::Freelance,
        Message::Rental,
        Message::SavingsGoals,
        Message::CreateGoal,
        Message::GoalName,
        Message::TargetAmount,
        Message::CurrentAmount,
        Message::InvestmentRecommendations,
        Message::Disclaimer,
        Message::DisclaimerText,
        Message::Save,
        Message::Cancel,
        Message::Submit,
        Message::Loading,
        Message::Error,
        Message::Success,
        Message::Rupees,
        Message::Income,
        Message::TotalIncome,
        Message::NetIncome,
        Message::AvailableForInvestment,
        Message::Month,
        Message::Date,
        Message::Source,
        Message::Share,
        Message::Id,
        Message::Remaining,
        Message::Progress,
        Message::Status,
        Message::DaysLeft,
        Message::TargetReached,
        Message::Completed,
        Message::TierExcellent,
        Message::TierGood,
        Message::TierFair,
        Message::TierLow,
        Message::TierCritical,
        Message::Risk,
        Message::Timeframe,
        Message::Platform,
        Message::SuggestedAmount,
        Message::Features,
        Message::Website,
        Message::NoRecommendations,
        Message::NoRecords,
        Message::ExpenseAdded,
        Message::IncomeAdded,
        Message::GoalCreated,
        Message::GoalUpdated,
    ];
}

/// Looks up the text for `message` in `language`.
pub fn t(language: Language, message: Message) -> &'static str {
    match language {
        Language::En => english(message),
        Language::Hi => hindi(message),
    }
}

fn english(message: Message) -> &'static str {
    match message {
        Message::Dashboard => "Dashboard",
        Message::Expenses => "Expenses",
        Message::Goals => "Goals",
        Message::Invest => "Invest",
        Message::Profile => "Profile",
        Message::Welcome => "Welcome",
        Message::MonthlyOverview => "Monthly Overview",
        Message::TotalExpenses => "Total Expenses",
        Message::Savings => "Savings",
        Message::QuickActions => "Quick Actions",
        Message::AddExpense => "Add Expense",
        Message::ViewGoals => "View Goals",
        Message::AddNewExpense => "Add New Expense",
        Message::Amount => "Amount",
        Message::Category => "Category",
        Message::Description => "Description",
        Message::Food => "Food",
        Message::Transport => "Transport",
        Message::Utilities => "Utilities",
        Message::Healthcare => "Healthcare",
        Message::Entertainment => "Entertainment",
        Message::Shopping => "Shopping",
        Message::Education => "Education",
        Message::Other => "Other",
        Message::Salary => "Salary",
        Message::Overtime => "Overtime",
        Message::Bonus => "Bonus",
        Message::Freelance => "Freelance",
        Message::Rental => "Rental",
        Message::SavingsGoals => "Savings Goals",
        Message::CreateGoal => "Create Goal",
        Message::GoalName => "Goal Name",
        Message::TargetAmount => "Target Amount",
        Message::CurrentAmount => "Current Amount",
        Message::InvestmentRecommendations => "Investment Recommendations",
        Message::Disclaimer => "Investment Disclaimer",
        Message::DisclaimerText => {
            "Investments are subject to market risks. Please read all scheme related documents carefully before investing."
        }
        Message::Save => "Save",
        Message::Cancel => "Cancel",
        Message::Submit => "Submit",
        Message::Loading => "Loading...",
        Message::Error => "Error",
        Message::Success => "Success",
        Message::Rupees => "₹",
        Message::Income => "Income",
        Message::TotalIncome => "Total Income",
        Message::NetIncome => "Net Income",
        Message::AvailableForInvestment => "Available for Investment",
        Message::Month => "Month",
        Message::Date => "Date",
        Message::Source => "Source",
        Message::Share => "Share",
        Message::Id => "ID",
        Message::Remaining => "Remaining",
        Message::Progress => "Progress",
        Message::Status => "Status",
        Message::DaysLeft => "Days Left",
        Message::TargetReached => "Target reached!",
        Message::Completed => "Completed!",
        Message::TierExcellent => "Excellent",
        Message::TierGood => "Good",
        Message::TierFair => "Fair",
        Message::TierLow => "Low",
        Message::TierCritical => "Critical",
        Message::Risk => "Risk",
        Message::Timeframe => "Timeframe",
        Message::Platform => "Platform",
        Message::SuggestedAmount => "Suggested Amount",
        Message::Features => "Features",
        Message::Website => "Website",
        Message::NoRecommendations => {
            "No investment suggestions for this month yet. Build a surplus above ₹1,000 to get started."
        }
        Message::NoRecords => "No records found",
        Message::ExpenseAdded => "Expense added successfully",
        Message::IncomeAdded => "Income added successfully",
        Message::GoalCreated => "Goal created successfully",
        Message::GoalUpdated => "Goal updated successfully",
    }
}

fn hindi(message: Message) -> &'static str {
    match message {
        Message::Dashboard => "डैशबोर्ड",
        Message::Expenses => "खर्च",
        Message::Goals => "लक्ष्य",
        Message::Invest => "निवेश",
        Message::Profile => "प्रोफाइल",
        Message::Welcome => "स्वागत",
        Message::MonthlyOverview => "मासिक अवलोकन",
        Message::TotalExpenses => "कुल खर्च",
        Message::Savings => "बचत",
        Message::QuickActions => "त्वरित कार्य",
        Message::AddExpense => "खर्च जोड़ें",
        Message::ViewGoals => "लक्ष्य देखें",
        Message::AddNewExpense => "नया खर्च जोड़ें",
        Message::Amount => "राशि",
        Message::Category => "श्रेणी",
        Message::Description => "विवरण",
        Message::Food => "भोजन",
        Message::Transport => "परिवहन",
        Message::Utilities => "उपयोगिताएं",
        Message::Healthcare => "स्वास्थ्य सेवा",
        Message::Entertainment => "मनोरंजन",
        Message::Shopping => "खरीदारी",
        Message::Education => "शिक्षा",
        Message::Other => "अन्य",
        Message::Salary => "वेतन",
        Message::Overtime => "ओवरटाइम",
        Message::Bonus => "बोनस",
        Message::Freelance => "फ्रीलांस",
        Message::Rental => "किराया",
        Message::SavingsGoals => "बचत लक्ष्य",
        Message::CreateGoal => "लक्ष्य बनाएं",
        Message::GoalName => "लक्ष्य का नाम",
        Message::TargetAmount => "लक्षित राशि",
        Message::CurrentAmount => "वर्तमान राशि",
        Message::InvestmentRecommendations => "निवेश सुझाव",
        Message::Disclaimer => "निवेश अस्वीकरण",
        Message::DisclaimerText => {
            "निवेश बाजार जोखिमों के अधीन हैं। निवेश से पहले सभी योजना संबंधी दस्तावेजों को ध्यान से पढ़ें।"
        }
        Message::Save => "सेव करें",
        Message::Cancel => "रद्द करें",
        Message::Submit => "जमा करें",
        Message::Loading => "लोड हो रहा है...",
        Message::Error => "त्रुटि",
        Message::Success => "सफलता",
        Message::Rupees => "₹",
        Message::Income => "आय",
        Message::TotalIncome => "कुल आय",
        Message::NetIncome => "शुद्ध आय",
        Message::AvailableForInvestment => "निवेश के लिए उपलब्ध",
        Message::Month => "महीना",
        Message::Date => "तारीख",
        Message::Source => "स्रोत",
        Message::Share => "हिस्सा",
        Message::Id => "आईडी",
        Message::Remaining => "शेष",
        Message::Progress => "प्रगति",
        Message::Status => "स्थिति",
        Message::DaysLeft => "दिन शेष",
        Message::TargetReached => "लक्ष्य पूरा हुआ!",
        Message::Completed => "पूरा हुआ!",
        Message::TierExcellent => "उत्कृष्ट",
        Message::TierGood => "अच्छा",
        Message::TierFair => "ठीक",
        Message::TierLow => "कम",
        Message::TierCritical => "गंभीर",
        Message::Risk => "जोखिम",
        Message::Timeframe => "समय सीमा",
        Message::Platform => "प्लेटफ़ॉर्म",
        Message::SuggestedAmount => "सुझाई गई राशि",
        Message::Features => "विशेषताएं",
        Message::Website => "वेबसाइट",
        Message::NoRecommendations => {
            "इस महीने के लिए अभी कोई निवेश सुझाव नहीं। शुरू करने के लिए ₹1,000 से अधिक की बचत करें।"
        }
        Message::NoRecords => "कोई रिकॉर्ड नहीं मिला",
        Message::ExpenseAdded => "खर्च सफलतापूर्वक जोड़ा गया",
        Message::IncomeAdded => "आय सफलतापूर्वक जोड़ी गई",
        Message::GoalCreated => "लक्ष्य सफलतापूर्वक बनाया गया",
        Message::GoalUpdated => "लक्ष्य सफलतापूर्वक अपडेट किया गया",
    }
}
