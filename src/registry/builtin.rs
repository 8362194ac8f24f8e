//! Table formats the host application writes and accepts

use crate::model::ColumnType::{self, Number as N, Text as T, YesNo as B};

/// (header name, columns in write order)
pub(super) type BuiltinTable = (&'static str, &'static [(&'static str, ColumnType)]);

pub(super) const PROGRAM_CONTROL: &str = "PROGRAM CONTROL";

pub(super) const TABLES: &[BuiltinTable] = &[
    (
        PROGRAM_CONTROL,
        &[
            ("ProgramName", T), ("Version", T), ("ProgLevel", T), ("LicenseNum", T),
            ("LicenseOS", B), ("LicenseSC", B), ("LicenseHT", B), ("CurrUnits", T),
            ("SteelCode", T), ("ConcCode", T), ("AlumCode", T), ("ColdCode", T), ("RegenHinge", B),
        ],
    ),
    (
        "PREFERENCES - DIMENSIONAL",
        &[
            ("MergeTol", N), ("FineGrid", N), ("Nudge", N), ("SelectTol", N), ("SnapTol", N),
            ("SLineThick", N), ("PLineThick", N), ("MaxFont", N), ("MinFont", N), ("AutoZoom", N),
            ("ShrinkFact", N), ("TextFileLen", N),
        ],
    ),
    (
        "ACTIVE DEGREES OF FREEDOM",
        &[
            ("UX", B), ("UY", B), ("UZ", B), ("RX", B), ("RY", B), ("RZ", B),
        ],
    ),
    (
        "ANALYSIS OPTIONS",
        &[
            ("Solver", T), ("SolverProc", T), ("Force32Bit", B), ("StiffCase", T), ("GeomMod", T),
            ("HingeOpt", T),
        ],
    ),
    (
        "COORDINATE SYSTEMS",
        &[
            ("Name", T), ("Cartesian", T), ("X", N), ("Y", N), ("Z", N), ("AboutZ", N),
            ("AboutY", N), ("AboutX", N),
        ],
    ),
    (
        "GRID LINES",
        &[
            ("CoordSys", T), ("AxisDir", T), ("GridID", T), ("XRYZCoord", N), ("LineType", T),
            ("LineColor", T), ("Visible", B), ("BubbleLoc", T), ("AllVisible", B),
            ("BubbleSize", N),
        ],
    ),
    (
        "MATERIAL PROPERTIES 01 - GENERAL",
        &[
            ("Material", T), ("Type", T), ("Grade", T), ("SymType", T), ("TempDepend", B),
            ("Color", T), ("GUID", T), ("Notes", T),
        ],
    ),
    (
        "MATERIAL PROPERTIES 02 - BASIC MECHANICAL PROPERTIES",
        &[
            ("Material", T), ("UnitWeight", N), ("UnitMass", N), ("E1", N), ("G12", N), ("U12", N),
            ("A1", N),
        ],
    ),
    (
        "MATERIAL PROPERTIES 03A - STEEL DATA",
        &[
            ("Material", T), ("Fy", N), ("Fu", N), ("EffFy", N), ("EffFu", N), ("SSCurveOpt", T),
            ("SSHysType", T), ("SHard", N), ("SMax", N), ("SRup", N), ("FinalSlope", N),
        ],
    ),
    (
        "MATERIAL PROPERTIES 03B - CONCRETE DATA",
        &[
            ("Material", T), ("Fc", N), ("eFc", N), ("LtWtConc", B), ("SSCurveOpt", T),
            ("SSHysType", T), ("SFc", N), ("SCap", N), ("FinalSlope", N), ("FAngle", N),
            ("DAngle", N),
        ],
    ),
    (
        "MATERIAL PROPERTIES 06 - DAMPING PARAMETERS",
        &[
            ("Material", T), ("ModalRatio", N), ("VisMass", N), ("VisStiff", N), ("HysMass", N),
            ("HysStiff", N),
        ],
    ),
    (
        "FRAME SECTION PROPERTIES 01 - GENERAL",
        &[
            ("SectionName", T), ("Material", T), ("Shape", T), ("t3", N), ("t2", N), ("tf", N),
            ("tw", N), ("t2b", N), ("tfb", N), ("dis", N), ("Area", N), ("TorsConst", N),
            ("I33", N), ("I22", N), ("I23", N), ("AS2", N), ("AS3", N), ("S33", N), ("S22", N),
            ("Z33", N), ("Z22", N), ("R33", N), ("R22", N), ("EccV2", N), ("ConcCol", B),
            ("ConcBeam", B), ("Color", T), ("TotalWt", N), ("TotalMass", N), ("FromFile", B),
            ("AMod", N), ("A2Mod", N), ("A3Mod", N), ("JMod", N), ("I2Mod", N), ("I3Mod", N),
            ("MMod", N), ("WMod", N), ("GUID", T), ("Notes", T),
        ],
    ),
    (
        "LOAD PATTERN DEFINITIONS",
        &[
            ("LoadPat", T), ("DesignType", T), ("SelfWtMult", N), ("AutoLoad", T), ("GUID", T),
            ("Notes", T),
        ],
    ),
    (
        "LOAD CASE DEFINITIONS",
        &[
            ("Case", T), ("Type", T), ("InitialCond", T), ("ModalCase", T), ("BaseCase", T),
            ("MassSource", T), ("DesTypeOpt", T), ("DesignType", T), ("DesActOpt", T),
            ("DesignAct", T), ("AutoType", T), ("RunCase", B), ("CaseStatus", T), ("GUID", T),
            ("Notes", T),
        ],
    ),
    (
        "COMBINATION DEFINITIONS",
        &[
            ("ComboName", T), ("ComboType", T), ("AutoDesign", B), ("CaseType", T), ("CaseName", T),
            ("ScaleFactor", N), ("SteelDesign", T), ("ConcDesign", T), ("AlumDesign", T),
            ("ColdDesign", T), ("GUID", T), ("Notes", T),
        ],
    ),
    (
        "AUTO COMBINATION OPTION DATA 01 - GENERAL",
        &[
            ("DesignType", T), ("AutoGen", B),
        ],
    ),
    (
        "CASE - BUCKLING 1 - GENERAL",
        &[
            ("Case", T), ("NumBuckMode", N), ("EigenTol", N),
        ],
    ),
    (
        "CASE - BUCKLING 2 - LOAD ASSIGNMENTS",
        &[
            ("Case", T), ("LoadType", T), ("LoadName", T), ("LoadSF", N),
        ],
    ),
    (
        "CASE - STATIC 1 - LOAD ASSIGNMENTS",
        &[
            ("Case", T), ("LoadType", T), ("LoadName", T), ("LoadSF", N),
        ],
    ),
    (
        "CASE - STATIC 2 - NONLINEAR LOAD APPLICATION",
        &[
            ("Case", T), ("LoadApp", T), ("MonitorDOF", T), ("MonitorJt", T),
        ],
    ),
    (
        "CASE - STATIC 4 - NONLINEAR PARAMETERS",
        &[
            ("Case", T), ("GeoNonLin", T), ("ResultsSave", T), ("MaxTotal", N), ("MaxNull", N),
            ("UseEvStep", B), ("EvLumpTol", N), ("MaxEvPerStp", N), ("UseIter", B),
            ("MaxIterCS", N), ("MaxIterNR", N), ("ItConvTol", N), ("UseLineSrch", B),
            ("StageSave", T), ("StageMinIns", N), ("StageMinTD", N), ("TimeDepMat", B),
            ("TFMaxIter", N), ("TFTol", N), ("TFAccelFact", N), ("TFNoStop", B),
        ],
    ),
    (
        "JOINT COORDINATES",
        &[
            ("Joint", T), ("CoordSys", T), ("CoordType", T), ("XorR", N), ("Y", N), ("Z", N),
            ("SpecialJt", B), ("GlobalX", N), ("GlobalY", N), ("GlobalZ", N), ("GUID", T),
        ],
    ),
    (
        "JOINT RESTRAINT ASSIGNMENTS",
        &[
            ("Joint", T), ("U1", B), ("U2", B), ("U3", B), ("R1", B), ("R2", B), ("R3", B),
        ],
    ),
    (
        "JOINT LOADS - FORCE",
        &[
            ("Joint", T), ("LoadPat", T), ("CoordSys", T), ("F1", N), ("F2", N), ("F3", N),
            ("M1", N), ("M2", N), ("M3", N), ("GUID", T),
        ],
    ),
    (
        "FRAME SECTION ASSIGNMENTS",
        &[
            ("Frame", T), ("SectionType", T), ("AutoSelect", T), ("AnalSect", T), ("DesignSect", T),
            ("MatProp", T),
        ],
    ),
    (
        "FRAME RELEASE ASSIGNMENTS 1 - GENERAL",
        &[
            ("Frame", T), ("PI", B), ("V2I", B), ("V3I", B), ("TI", B), ("M2I", B), ("M3I", B),
            ("PJ", B), ("V2J", B), ("V3J", B), ("TJ", B), ("M2J", B), ("M3J", B), ("PartialFix", B),
        ],
    ),
    (
        "FRAME OUTPUT STATION ASSIGNMENTS",
        &[
            ("Frame", T), ("StationType", T), ("MinNumSta", N), ("MaxStaSpcg", N),
            ("AddAtElmInt", B), ("AddAtPtLoad", B),
        ],
    ),
    (
        "FRAME AUTO MESH ASSIGNMENTS",
        &[
            ("Frame", T), ("AutoMesh", B), ("AtJoints", B), ("AtFrames", B), ("NumSegments", N),
            ("MaxLength", N), ("MaxDegrees", N),
        ],
    ),
    (
        "PREFERENCES - STEEL DESIGN - AISC 360-16",
        &[
            ("THDesign", T), ("FrameType", T), ("PatLLF", N), ("SRatioLimit", N), ("MaxIter", N),
            ("SDC", T), ("SeisCode", N), ("SeisLoad", N), ("ImpFactor", N), ("SystemRho", N),
            ("SystemSds", N), ("SystemR", N), ("SystemCd", N), ("Omega0", N), ("Provision", T),
            ("AMethod", T), ("SOMethod", T), ("SRMethod", T), ("NLCoeff", N), ("PhiB", N),
            ("PhiC", N), ("PhiTY", N), ("PhiTF", N), ("PhiV", N), ("PhiVRolledI", N), ("PhiVT", N),
            ("PlugWeld", N), ("HSSWelding", T), ("HSSReduceT", N), ("CheckDefl", N), ("DLRat", N),
            ("SDLAndLLRat", N), ("LLRat", N), ("TotalRat", N), ("NetRat", N),
        ],
    ),
    (
        "CONNECTIVITY - FRAME",
        &[
            ("Frame", T), ("JointI", T), ("JointJ", T), ("IsCurved", N), ("Length", N),
            ("CentroidX", N), ("CentroidY", N), ("CentroidZ", N), ("GUID", T),
        ],
    ),
    (
        "NAMED SETS - DATABASE TABLES 1 - GENERAL",
        &[
            ("DBNamedSet", T), ("SortOrder", T), ("Unformatted", B), ("ModeStart", T),
            ("ModeEnd", T), ("ModalHist", T), ("DirectHist", T), ("NLStatic", T), ("BaseReacX", N),
            ("BaseReacY", N), ("BaseReacZ", N), ("Combo", T), ("Steady", T), ("SteadyOpt", T),
            ("PSD", T), ("Multistep", T), ("NumTables", N), ("NumLoads", N), ("NumCases", N),
            ("NumGenDispl", N), ("NumSectCuts", N), ("NumVWSets", N), ("NumNLSSets", N),
            ("NumRSSets", N), ("NumPFSets", N),
        ],
    ),
    (
        "NAMED SETS - DATABASE TABLES 2 - SELECTIONS",
        &[
            ("DBNamedSet", T), ("SelectType", T), ("Selection", T),
        ],
    ),
    (
        "TABLES AUTOMATICALLY SAVED AFTER ANALYSIS",
        &[
            ("DBNamedSet", T), ("SelectType", T), ("Selection", T),
        ],
    ),
    (
        "BUCKLING FACTORS",
        &[
            ("OutputCase", T), ("StepType", T), ("StepNum", N), ("ScaleFactor", N),
        ],
    ),
    (
        "ELEMENT FORCES - FRAMES",
        &[
            ("Frame", T), ("Station", N), ("OutputCase", T), ("CaseType", T), ("StepType", T),
            ("StepNum", N), ("P", N), ("V2", N), ("V3", N), ("T", N), ("M2", N), ("M3", N),
            ("FrameElem", T), ("ElemStation", N),
        ],
    ),
    (
        "ELEMENT STRESSES - FRAMES",
        &[
            ("Frame", T), ("Station", N), ("OutputCase", T), ("CaseType", T), ("StepType", T),
            ("StepNum", N), ("Point", T), ("X2", N), ("X3", N), ("S11", N), ("S12", N), ("S13", N),
            ("SMax", N), ("SMin", N), ("SVM", N), ("IsS11Max", B), ("IsS12Max", B), ("IsS13Max", B),
            ("IsSMaxMax", B), ("IsSMinMax", B), ("IsSVMMax", B), ("IsS11Min", B), ("IsS12Min", B),
            ("IsS31Min", B), ("IsSMaxMin", B), ("IsSMinMin", B), ("IsSVMMin", B), ("FrameElem", T),
            ("ElemStation", N),
        ],
    ),
    (
        "JOINT DISPLACEMENTS",
        &[
            ("Joint", T), ("OutputCase", T), ("CaseType", T), ("StepType", T), ("StepNum", N),
            ("U1", N), ("U2", N), ("U3", N), ("R1", N), ("R2", N), ("R3", N),
        ],
    ),
    (
        "JOINT REACTIONS",
        &[
            ("Joint", T), ("OutputCase", T), ("CaseType", T), ("StepType", T), ("StepNum", N),
            ("F1", N), ("F2", N), ("F3", N), ("M1", N), ("M2", N), ("M3", N),
        ],
    ),
    (
        "OBJECTS AND ELEMENTS - JOINTS",
        &[
            ("JointElem", T), ("JointObject", T), ("GlobalX", N), ("GlobalY", N), ("GlobalZ", N),
        ],
    ),
    (
        "OBJECTS AND ELEMENTS - FRAMES",
        &[
            ("FrameElem", T), ("FrameObject", T), ("ElemJtI", T), ("ElemJtJ", T),
        ],
    ),
    (
        "ANALYSIS MESSAGES",
        &[
            ("DateTime", T), ("Type", T), ("Message", T), ("LoadCase", T), ("Operation", T),
            ("TagRun", N), ("SerialRun", N), ("Computer", T),
        ],
    ),
    (
        "OVERWRITES - STEEL DESIGN - AISC 360-16",
        &[
            ("Frame", T), ("DesignSect", T), ("FrameType", T), ("Fy", N), ("RLLF", N),
            ("AreaRatio", N), ("XLMajor", N), ("XLMinor", N), ("XLLTB", N), ("K1Major", N),
            ("K1Minor", N), ("K2Major", N), ("K2Minor", N), ("KLTB", N), ("CmMajor", N),
            ("CmMinor", N), ("Cb", N), ("B1Major", N), ("B1Minor", N), ("B2Major", N),
            ("B2Minor", N), ("HSSReduceT", N), ("HSSWelding", T), ("Omega0", N), ("Ry", N),
            ("Pnc", N), ("Pnt", N), ("Mn3", N), ("Mn2", N), ("Vn2", N), ("Vn3", N),
            ("CheckDefl", N), ("DeflType", T), ("DLRat", N), ("SDLAndLLRat", N), ("LLRat", N),
            ("TotalRat", N), ("NetRat", N), ("DLAbs", N), ("SDLAndLLAbs", N), ("LLAbs", N),
            ("TotalAbs", N), ("NetAbs", N), ("SpecCamber", N), ("DCLimit", N),
        ],
    ),
    (
        "STEEL DESIGN 1 - SUMMARY DATA - AISC 360-16",
        &[
            ("Frame", T), ("DesignSect", T), ("DesignType", T), ("Status", T), ("Ratio", N),
            ("RatioType", T), ("Combo", T), ("Location", N), ("ErrMsg", T), ("WarnMsg", T),
        ],
    ),
    (
        "STEEL DESIGN 2 - PMM DETAILS - AISC 360-16",
        &[
            ("Frame", T), ("DesignSect", T), ("DesignType", T), ("Status", T), ("Combo", T),
            ("Location", N), ("Pr", N), ("MrMajor", N), ("MrMinor", N), ("VrMajor", N),
            ("VrMinor", N), ("Tr", N), ("Equation", T), ("TotalRatio", N), ("PRatio", N),
            ("MMajRatio", N), ("MMinRatio", N), ("VMajRatio", N), ("VMinRatio", N), ("TorRatio", N),
            ("DCLimit", N), ("PrDsgn", N), ("PcComp", N), ("PcTension", N), ("MrMajorDsgn", N),
            ("McMajor", N), ("MrMinorDsgn", N), ("McMinor", N), ("XLMajor", N), ("XLMinor", N),
            ("XLLTB", N), ("K1Major", N), ("K1Minor", N), ("K2Major", N), ("K2Minor", N),
            ("KLTB", N), ("CmMajor", N), ("CmMinor", N), ("Cb", N), ("B1Major", N), ("B1Minor", N),
            ("B2Major", N), ("B2Minor", N), ("Fy", N), ("E", N), ("Length", N), ("MajAxisAng", N),
            ("RLLF", N), ("SectClass", T), ("FramingType", T), ("SDC", T), ("Omega0", N),
            ("SystemCd", N), ("ErrMsg", T), ("WarnMsg", T),
        ],
    ),
    (
        "STEEL DESIGN 3 - SHEAR DETAILS - AISC 360-16",
        &[
            ("Frame", T), ("DesignSect", T), ("DesignType", T), ("Status", T), ("VMajorCombo", T),
            ("VMajorLoc", N), ("VMajorRatio", N), ("VrMajDsgn", N), ("PhiVnMajor", N),
            ("VnMajOmega", N), ("TrMajor", N), ("VMinorCombo", T), ("VMinorLoc", N),
            ("VMinorRatio", N), ("VrMinDsgn", N), ("PhiVnMinor", N), ("VnMinOmega", N),
            ("TrMinor", N), ("DCLimit", N), ("RLLF", N), ("FramingType", T), ("ErrMsg", T),
            ("WarnMsg", T),
        ],
    ),
    (
        "STEEL DESIGN 9 - DECISION PARAMETERS - AISC 360-16",
        &[
            ("Frame", T), ("DesignSect", T), ("AlphaPrOPy", N), ("aPrOPyGT05", N),
            ("AlphaPrOPeL", N), ("aPrOPeGT015", N), ("Taub", N), ("EAmodifier", N),
            ("EImodifier", N),
        ],
    ),
];
