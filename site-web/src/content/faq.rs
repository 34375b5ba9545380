//! Support page FAQ

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 8] = [
    FaqEntry {
        question: "How does the AI financial advisor work?",
        answer: "Our AI assistant analyzes your spending patterns, income, and financial goals to provide personalized insights and recommendations. It learns from your behavior, predicts future expenses, and proactively suggests ways to save money. Simply chat with it in natural language to get instant financial advice tailored to your unique situation.",
    },
    FaqEntry {
        question: "How do I add transactions to Expenzez?",
        answer: "You can add transactions in two easy ways: 1) Manually enter each transaction with details like amount, category, and date. Perfect for cash payments and quick entries. 2) Bulk import via CSV file - ideal for freelancers, small businesses, or importing bank statements. Our AI automatically categorizes imported transactions.",
    },
    FaqEntry {
        question: "Can the AI help me save money?",
        answer: "Absolutely! Our AI identifies spending patterns, finds unnecessary subscriptions, suggests budget adjustments, and alerts you before you overspend. It learns your financial habits and provides actionable recommendations to help you reach your savings goals faster. Think of it as your personal financial advisor, available 24/7.",
    },
    FaqEntry {
        question: "Is my financial data secure?",
        answer: "Yes, security is our top priority. We use bank-grade encryption for all data in transit and at rest. Your information is protected with biometric authentication (Face ID/Touch ID) and optional PIN protection. We never share your data with third parties, and all AI processing is done securely within our encrypted system.",
    },
    FaqEntry {
        question: "What can I ask the AI assistant?",
        answer: "You can ask anything about your finances! Examples: 'Where am I spending the most?', 'Am I on track for my savings goal?', 'How much did I spend on groceries this month?', 'Can I afford this purchase?'. The AI understands natural language and provides instant, personalized answers based on your actual spending data.",
    },
    FaqEntry {
        question: "How does CSV import work?",
        answer: "Go to Transactions > Import > Select CSV file. Our AI automatically maps columns (date, amount, description, category) and imports all transactions at once. Perfect for importing bank statements, credit card exports, or migrating from other apps. The AI then categorizes everything intelligently.",
    },
    FaqEntry {
        question: "Does the AI work offline?",
        answer: "Yes! Once your transactions are synced, the AI can provide insights and answer questions about your existing data even without internet. However, you'll need connectivity to add new transactions or get the latest AI model updates.",
    },
    FaqEntry {
        question: "What happens if I change my phone?",
        answer: "Simply download Expenzez on your new device and log in with your existing credentials. All your transactions, budgets, and AI insights will be restored automatically. For security, you'll need to set up biometric authentication or PIN on the new device.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_questions_with_answers() {
        for entry in FAQ_ENTRIES {
            assert!(entry.question.ends_with('?'), "{}", entry.question);
            assert!(!entry.answer.is_empty());
        }
    }
}
