//! The closed set of agent categories and their tool declarations.

use medroute_ai::ToolDefinition;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Static display metadata for one agent card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Who handles a request. `Coordinator` means nobody was delegated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentCategory {
    Records,
    Finance,
    Education,
    Clinical,
    Coordinator,
}

impl AgentCategory {
    /// The four categories the oracle can delegate to, in display order.
    pub const DELEGATES: [AgentCategory; 4] = [
        AgentCategory::Records,
        AgentCategory::Finance,
        AgentCategory::Education,
        AgentCategory::Clinical,
    ];

    /// Function name used in the oracle's tool declarations.
    pub fn wire_name(self) -> Option<&'static str> {
        match self {
            AgentCategory::Records => Some("medical_records_manager"),
            AgentCategory::Finance => Some("admin_document_processor"),
            AgentCategory::Education => Some("education_material_creator"),
            AgentCategory::Clinical => Some("clinical_support_agent"),
            AgentCategory::Coordinator => None,
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::DELEGATES
            .into_iter()
            .find(|category| category.wire_name() == Some(name))
    }

    pub fn is_delegate(self) -> bool {
        self != AgentCategory::Coordinator
    }

    pub fn info(self) -> AgentInfo {
        match self {
            AgentCategory::Records => AgentInfo {
                name: "Medical Records (EMR)",
                description: "Access, update & integration of patient data.",
                icon: "📋",
            },
            AgentCategory::Finance => AgentInfo {
                name: "Admin & Finance",
                description: "Financial reports, insurance claims & budgets.",
                icon: "💼",
            },
            AgentCategory::Education => AgentInfo {
                name: "Patient Education",
                description: "Multimedia education material.",
                icon: "🎓",
            },
            AgentCategory::Clinical => AgentInfo {
                name: "Clinical Support",
                description: "In-depth medical analysis & diagnosis.",
                icon: "🩺",
            },
            AgentCategory::Coordinator => AgentInfo {
                name: "Coordinator",
                description: "Intent analysis & routing",
                icon: "🤖",
            },
        }
    }

    /// Tool declaration handed to the oracle; `None` for the coordinator.
    pub fn tool_definition(self) -> Option<ToolDefinition> {
        let (description, parameters) = match self {
            AgentCategory::Records => (
                "Routes requests about accessing, updating or integrating a patient's \
                 Electronic Medical Record (EMR).",
                json!({
                    "type": "object",
                    "properties": {
                        "patient_id": { "type": "string", "description": "Patient ID or name" },
                        "access_type": {
                            "type": "string",
                            "enum": ["History_Access", "Update_Diagnosis", "LIS_RIS_Integration"]
                        }
                    },
                    "required": ["patient_id", "access_type"]
                }),
            ),
            AgentCategory::Finance => (
                "Routes non-clinical requests such as financial reports, billing or \
                 administrative documents.",
                json!({
                    "type": "object",
                    "properties": {
                        "document_type": {
                            "type": "string",
                            "enum": ["Financial_Report", "Insurance_Claim", "Cost_Budget"]
                        },
                        "period_detail": {
                            "type": "string",
                            "description": "Time period (month, year) or transaction detail"
                        }
                    },
                    "required": ["document_type", "period_detail"]
                }),
            ),
            AgentCategory::Education => (
                "Routes requests to produce accessible, jargon-free multimedia content \
                 (diagrams, videos, documents).",
                json!({
                    "type": "object",
                    "properties": {
                        "education_topic": {
                            "type": "string",
                            "description": "Health topic to explain"
                        },
                        "output_format": {
                            "type": "string",
                            "enum": ["Diagram", "Video", "Document"],
                            "description": "Desired material format"
                        }
                    },
                    "required": ["education_topic"]
                }),
            ),
            AgentCategory::Clinical => (
                "Routes requests needing in-depth analysis of medical data or clinical \
                 images (multimodal).",
                json!({
                    "type": "object",
                    "properties": {
                        "clinical_data": {
                            "type": "string",
                            "enum": ["Symptoms", "Initial_Diagnosis", "History_Data"],
                            "description": "Kind of input data"
                        },
                        "analysis_type": {
                            "type": "string",
                            "enum": [
                                "Differential_Diagnosis",
                                "Therapy_Planning",
                                "Medical_Image_Analysis"
                            ]
                        }
                    },
                    "required": ["clinical_data", "analysis_type"]
                }),
            ),
            AgentCategory::Coordinator => return None,
        };

        Some(ToolDefinition {
            name: self.wire_name()?.to_string(),
            description: description.to_string(),
            parameters,
        })
    }
}

/// Tool declarations for all four delegates.
pub fn coordinator_tools() -> Vec<ToolDefinition> {
    AgentCategory::DELEGATES
        .into_iter()
        .filter_map(AgentCategory::tool_definition)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for category in AgentCategory::DELEGATES {
            let name = category.wire_name().unwrap();
            assert_eq!(AgentCategory::from_wire_name(name), Some(category));
        }
    }

    #[test]
    fn coordinator_has_no_wire_name() {
        assert_eq!(AgentCategory::Coordinator.wire_name(), None);
        assert_eq!(AgentCategory::from_wire_name("none"), None);
        assert_eq!(AgentCategory::from_wire_name(""), None);
        assert!(!AgentCategory::Coordinator.is_delegate());
    }

    #[test]
    fn tools_cover_the_four_delegates() {
        let tools = coordinator_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "medical_records_manager",
                "admin_document_processor",
                "education_material_creator",
                "clinical_support_agent",
            ]
        );
    }

    #[test]
    fn records_tool_requires_patient_and_access_type() {
        let tool = AgentCategory::Records.tool_definition().unwrap();
        assert_eq!(
            tool.parameters["required"],
            json!(["patient_id", "access_type"])
        );
        assert_eq!(
            tool.parameters["properties"]["access_type"]["enum"],
            json!(["History_Access", "Update_Diagnosis", "LIS_RIS_Integration"])
        );
    }

    #[test]
    fn education_tool_only_requires_topic() {
        let tool = AgentCategory::Education.tool_definition().unwrap();
        assert_eq!(tool.parameters["required"], json!(["education_topic"]));
    }

    #[test]
    fn every_category_has_display_info() {
        for category in AgentCategory::DELEGATES
            .into_iter()
            .chain([AgentCategory::Coordinator])
        {
            let info = category.info();
            assert!(!info.name.is_empty());
            assert!(!info.description.is_empty());
        }
        assert_eq!(AgentCategory::Coordinator.info().name, "Coordinator");
    }
}
